pub mod compose_service_trait;
