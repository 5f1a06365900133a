mod api_key_panel;
mod personality_test_links;

pub use api_key_panel::ApiKeyPanel;
pub use personality_test_links::PersonalityTestLinks;
