pub use super::incidents::Entity as Incidents;
