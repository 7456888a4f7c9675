mod about_section;
mod contact_section;
mod hero_section;
mod loading_screen;
mod navigation;
mod portfolio_section;
mod project_detail;

pub use about_section::AboutSection;
pub use contact_section::ContactSection;
pub use hero_section::HeroSection;
pub use loading_screen::LoadingScreen;
pub use navigation::Navigation;
pub use portfolio_section::PortfolioSection;
pub use project_detail::ProjectDetail;
