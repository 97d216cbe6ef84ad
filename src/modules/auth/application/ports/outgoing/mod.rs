pub mod otp_code_generator;
pub mod otp_repository;
pub mod password_hasher;
pub mod profile_repository;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use otp_code_generator::OtpCodeGenerator;
pub use otp_repository::{CreateOtpData, OtpRepository, OtpRepositoryError};
pub use password_hasher::{HashError, PasswordHasher};
pub use profile_repository::{
    EmploymentData, JobPreferencesData, PermissionsData, ProfileRepository, ProfileRepositoryError,
};
pub use token_provider::{
    TokenClaims, TokenError, TokenPair, TokenProvider, ACCESS_TOKEN_TYPE, REFRESH_TOKEN_TYPE,
};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{BasicProfileData, CreateUserData, UserRepository, UserRepositoryError};
