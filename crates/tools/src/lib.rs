//! Built-in support tools for helpdesk.
//!
//! Five mock back-office operations the model can call while handling a
//! "my order never arrived" case: customer lookup, delivery status,
//! drop-off photo and map, fraud check, and resolution. Every tool returns
//! fixed stub data; none of them reach a real system.

mod args;
pub mod customer_info;
pub mod delivery_info;
pub mod dropoff;
pub mod fixtures;
pub mod fraud_check;
pub mod resolution;

use helpdesk_core::tool::ToolRegistry;

pub use fixtures::initial_user_info;

/// Create the registry with all five support tools, in the order they are
/// offered to the model.
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(customer_info::CustomerInfoTool));
    registry.register(Box::new(delivery_info::DeliveryInfoTool));
    registry.register(Box::new(dropoff::DropoffPhotoAndMapTool));
    registry.register(Box::new(fraud_check::FraudCheckTool));
    registry.register(Box::new(resolution::ResolutionTool));
    registry
}
