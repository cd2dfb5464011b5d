pub mod user;
pub mod auth_token;

/*
 A user registers once (email is the login) and then trades email + password
 for bearer tokens. Every successful token request gets its own auth_token row,
 so logging out on one client leaves the others alone.
 */
