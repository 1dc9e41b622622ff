pub mod compose_service_impl;
