use tienda_domain::email::validate_email;
use tienda_domain::id::CustomerId;

use crate::domain::repository::{CustomerRepository, PasswordHasherPort};
use crate::domain::types::{Customer, NewCustomer};
use crate::error::ShopServiceError;

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

// ── RegisterCustomer ─────────────────────────────────────────────────────────

pub struct RegisterCustomerInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub password: String,
}

pub struct RegisterCustomerUseCase<R: CustomerRepository, H: PasswordHasherPort> {
    pub repo: R,
    pub hasher: H,
}

impl<R: CustomerRepository, H: PasswordHasherPort> RegisterCustomerUseCase<R, H> {
    pub async fn execute(&self, input: RegisterCustomerInput) -> Result<Customer, ShopServiceError> {
        if is_blank(&input.first_name)
            || is_blank(&input.last_name)
            || is_blank(&input.email)
            || is_blank(&input.password)
        {
            return Err(ShopServiceError::MissingData);
        }
        let email = input.email.trim();
        if !validate_email(email) {
            return Err(ShopServiceError::InvalidEmail);
        }
        let password_hash = self.hasher.hash(&input.password).await?;
        let customer = self
            .repo
            .create(&NewCustomer {
                first_name: input.first_name.trim().to_owned(),
                last_name: input.last_name.trim().to_owned(),
                email: email.to_owned(),
                phone_number: input.phone_number.trim().to_owned(),
                address: input.address.trim().to_owned(),
                password_hash,
            })
            .await?;
        tracing::info!(customer_id = customer.customer_id, "customer registered");
        Ok(customer)
    }
}

// ── AuthenticateCustomer ─────────────────────────────────────────────────────

pub struct AuthenticateCustomerUseCase<R: CustomerRepository, H: PasswordHasherPort> {
    pub repo: R,
    pub hasher: H,
}

impl<R: CustomerRepository, H: PasswordHasherPort> AuthenticateCustomerUseCase<R, H> {
    /// Unknown email and wrong password fail identically, including the one
    /// hash verification each performs.
    pub async fn execute(&self, email: &str, password: &str) -> Result<Customer, ShopServiceError> {
        if is_blank(email) || password.is_empty() {
            return Err(ShopServiceError::MissingData);
        }
        let Some(customer) = self.repo.find_by_email(email.trim()).await? else {
            self.hasher
                .verify(password, self.hasher.decoy_digest())
                .await?;
            return Err(ShopServiceError::InvalidCredentials);
        };
        if !self.hasher.verify(password, &customer.password_hash).await? {
            return Err(ShopServiceError::InvalidCredentials);
        }
        Ok(customer)
    }
}

// ── ListCustomers ────────────────────────────────────────────────────────────

pub struct ListCustomersUseCase<R: CustomerRepository> {
    pub repo: R,
}

impl<R: CustomerRepository> ListCustomersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Customer>, ShopServiceError> {
        self.repo.list().await
    }
}

// ── GetCustomer ──────────────────────────────────────────────────────────────

pub struct GetCustomerUseCase<R: CustomerRepository> {
    pub repo: R,
}

impl<R: CustomerRepository> GetCustomerUseCase<R> {
    pub async fn execute(&self, customer_id: CustomerId) -> Result<Customer, ShopServiceError> {
        self.repo
            .find_by_id(customer_id.get())
            .await?
            .ok_or(ShopServiceError::CustomerNotFound)
    }
}

// ── UpdateAddress ────────────────────────────────────────────────────────────

pub struct UpdateAddressUseCase<R: CustomerRepository> {
    pub repo: R,
}

impl<R: CustomerRepository> UpdateAddressUseCase<R> {
    pub async fn execute(
        &self,
        customer_id: CustomerId,
        address: &str,
    ) -> Result<(), ShopServiceError> {
        if is_blank(address) {
            return Err(ShopServiceError::MissingData);
        }
        let updated = self
            .repo
            .update_address(customer_id.get(), address.trim())
            .await?;
        if !updated {
            return Err(ShopServiceError::CustomerNotFound);
        }
        Ok(())
    }
}

// ── UpdatePassword ───────────────────────────────────────────────────────────

pub struct UpdatePasswordInput {
    pub old_password: String,
    pub new_password: String,
}

pub struct UpdatePasswordUseCase<R: CustomerRepository, H: PasswordHasherPort> {
    pub repo: R,
    pub hasher: H,
}

impl<R: CustomerRepository, H: PasswordHasherPort> UpdatePasswordUseCase<R, H> {
    pub async fn execute(
        &self,
        customer_id: CustomerId,
        input: UpdatePasswordInput,
    ) -> Result<(), ShopServiceError> {
        if input.old_password.is_empty() || is_blank(&input.new_password) {
            return Err(ShopServiceError::MissingData);
        }
        let customer = self
            .repo
            .find_by_id(customer_id.get())
            .await?
            .ok_or(ShopServiceError::CustomerNotFound)?;
        if !self
            .hasher
            .verify(&input.old_password, &customer.password_hash)
            .await?
        {
            return Err(ShopServiceError::InvalidCredentials);
        }
        let password_hash = self.hasher.hash(&input.new_password).await?;
        let updated = self
            .repo
            .update_password_hash(customer.customer_id, &password_hash)
            .await?;
        if !updated {
            return Err(ShopServiceError::CustomerNotFound);
        }
        tracing::info!(customer_id = customer.customer_id, "customer password replaced");
        Ok(())
    }
}
