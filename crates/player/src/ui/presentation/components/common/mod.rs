mod language_switcher;
mod loading_animation;
mod toast;

pub use language_switcher::LanguageSwitcher;
pub use loading_animation::LoadingAnimation;
pub use toast::ToastHost;
