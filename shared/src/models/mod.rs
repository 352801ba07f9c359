//! Domain models for the Bloom platform
//!
//! Each model file carries the entity struct plus its Create/Update payloads.
//! `sqlx::FromRow` derives are gated behind the `db` feature so the wizard
//! client can depend on this crate without pulling in the database stack.

pub mod arrangement;
pub mod arrangement_type;
pub mod chat;
pub mod client;
pub mod color;
pub mod design_template;
pub mod event;
pub mod event_arrangement;
pub mod event_design;
pub mod event_type;
pub mod flower;
pub mod flower_category;
pub mod inspiration;
pub mod vendor;

pub use arrangement::{Arrangement, ArrangementCreate};
pub use arrangement_type::{ArrangementType, ArrangementTypeWithPreview};
pub use chat::Chat;
pub use client::{Client, ClientCreate};
pub use color::{Color, ColorCreate};
pub use design_template::{DesignTemplate, DesignTemplateSlot};
pub use event::{Event, EventDetail, EventStatus};
pub use event_arrangement::{EventArrangement, Section};
pub use event_design::{EventDesign, EventFlowers};
pub use event_type::EventType;
pub use flower::{Flower, FlowerCreate};
pub use flower_category::{FlowerCategory, FlowerCategoryWithPreview};
pub use inspiration::{Inspiration, InspirationSource};
pub use vendor::{Vendor, VendorCreate};
