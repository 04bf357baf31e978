//! UI Components for Software Engineer Wrap.

mod animated_counter;
mod background_selector;
mod chip_group;
mod personality_selector;
mod share_popup;
mod stat_item;
mod toast;
mod wrap_card;

pub use animated_counter::AnimatedCounter;
pub use background_selector::BackgroundSelector;
pub use chip_group::ChipGroup;
pub use personality_selector::PersonalitySelector;
pub use share_popup::SharePopup;
pub use stat_item::StatItem;
pub use toast::ToastStack;
pub use wrap_card::WrapCard;
