pub mod current_user;
pub mod valid_json;
pub mod valid_query;
