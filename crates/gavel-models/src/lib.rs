pub mod response;
pub mod rights;

pub use response::{ApiError, ApiResponse, ResponseParameters};
pub use rights::ChatAdministratorRights;
