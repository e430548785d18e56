mod account_test;
mod catalog_test;
mod http_test;
