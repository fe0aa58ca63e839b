//! Shared UI components for the site pages.

pub mod button;
pub mod container;
pub mod footer;
pub mod grid;
pub mod layout;
pub mod navigation;
pub mod sections;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use container::{Container, ContainerSize};
pub use footer::Footer;
pub use grid::{Grid, GridCross};
pub use layout::{Document, Layout};
pub use navigation::{DropdownPanel, MobileMenu, NavigationBar};
pub use sections::{
    reveal_delay, Checklist, CtaBanner, Feature, FeatureGrid, Hero, SectionHeading, Stat, StatRow,
    Step, StepList,
};
