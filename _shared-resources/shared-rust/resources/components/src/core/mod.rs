// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod preference;

pub use preference::{
    Preference, PreferenceChannel, Size,
    SizePreference, SizePreferences,
};
