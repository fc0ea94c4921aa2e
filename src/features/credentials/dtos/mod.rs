mod credential_dto;

pub use credential_dto::CredentialVerificationDto;
