use crate::api::{ApiError, RegisterUser};
use crate::utils::validation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone_number: String,
    pub location: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterUser, ApiError> {
        validation::require(&self.name, "Name")?;
        validation::email(self.email.trim())?;
        validation::new_password(&self.password, &self.confirm_password)?;
        validation::require(&self.phone_number, "Phone number")?;
        validation::require(&self.location, "Location")?;
        Ok(RegisterUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            phone_number: self.phone_number.trim().to_string(),
            location: self.location.trim().to_string(),
        })
    }
}
