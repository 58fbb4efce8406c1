mod identity;
mod trip;
mod user_role;
