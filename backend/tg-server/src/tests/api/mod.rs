mod error;
mod require_auth;
mod user_dto;
