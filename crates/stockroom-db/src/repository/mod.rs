//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  FormController                                                        │
//! │       │                                                                 │
//! │       │  db.products().get(7)                                          │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── insert(&self, product)                                            │
//! │  ├── update(&self, product)                                            │
//! │  ├── delete(&self, product_id)                                         │
//! │  ├── get(&self, product_id)                                            │
//! │  └── list_all(&self)                                                   │
//! │       │                                                                 │
//! │       │  Parameterized SQL                                             │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  All knowledge of table and column names stays in this module.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
