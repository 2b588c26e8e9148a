// Test Helper Modules for Real Endpoint Testing
//
// Integration and contract tests talk to a real actix server bound to a
// random port, configured exactly like the production binary.
//
// Usage (from a test crate under tests/contract):
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;
//
// Example:
//   #[actix_web::test]
//   async fn test_reference_scenario() {
//       let srv = spawn_test_server();
//       let mut response = srv.post("/api/calculate")
//           .send_json(&TestDataFactory::reference_payload())
//           .await
//           .unwrap();
//
//       assert_ok(&response);
//   }

#![allow(dead_code)]

pub mod assertions;
pub mod test_server;

// Re-export commonly used types and functions
pub use assertions::*;
pub use test_data::*;
pub use test_server::*;
