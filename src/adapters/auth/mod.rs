//! Authentication adapters implementing the `SessionValidator` port.

mod mock;
mod supabase;

pub use mock::MockSessionValidator;
pub use supabase::{SupabaseConfig, SupabaseSessionValidator};
