//! Store adapters. Implement ClinicStore.

pub mod memory_store;
pub mod supabase;

pub use memory_store::InMemoryStore;
pub use supabase::SupabaseStore;
