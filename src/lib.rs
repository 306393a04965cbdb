//! Grocer: a flat-file grocery inventory manager.
//!
//! Records are held in an in-memory [`Inventory`] and persisted as plain
//! text, one whitespace-separated record per line. The interactive menu in
//! [`session`] drives the store; the [`codec`] module handles load/save.
//!
//! # Example
//!
//! ```no_run
//! use grocer::{Category, Inventory, Item, codec};
//! use std::path::Path;
//!
//! let mut inventory = codec::load(Path::new("groceries.db")).unwrap();
//!
//! inventory
//!     .add(Item {
//!         id: 7,
//!         name: "Soap".to_string(),
//!         cost: 3.49,
//!         category: Category::Nonfood,
//!     })
//!     .unwrap();
//!
//! let milk = inventory.find_by_name("Milk").unwrap();
//! println!("{} costs {:.2}", milk.name, milk.cost);
//!
//! codec::save(&mut inventory, Path::new("groceries.db")).unwrap();
//! ```

mod store;
mod types;

pub mod codec;
pub mod session;

// Re-export public API
pub use session::Session;
pub use store::{Inventory, StoreError};
pub use types::{Category, Item, MAX_NAME_LEN, ValidationError};
