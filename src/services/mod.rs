pub mod flatten_service;
