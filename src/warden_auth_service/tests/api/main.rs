mod helpers;
mod login;
mod wiring;
