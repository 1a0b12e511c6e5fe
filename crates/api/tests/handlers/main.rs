mod appointments_test;
mod config_test;
mod health_test;
mod inventory_test;
mod middleware_test;
mod reports_test;
mod test_utils;
