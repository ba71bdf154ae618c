use strum::{AsRefStr, Display as StrumDisplay, EnumIter, IntoStaticStr};

use crate::domain::{
    logging::{LogComponent, get_logger},
    market_data::SignClass,
};

/// Named indicator slots of the page, addressed by element id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, StrumDisplay, EnumIter)]
pub enum DisplaySlot {
    #[strum(serialize = "last-update")]
    LastUpdate,
    #[strum(serialize = "total-volume")]
    TotalVolume,
    #[strum(serialize = "sh-index")]
    ShIndex,
    #[strum(serialize = "sh-change")]
    ShChange,
    #[strum(serialize = "sz-index")]
    SzIndex,
    #[strum(serialize = "sz-change")]
    SzChange,
    #[strum(serialize = "volume-change")]
    VolumeChange,
}

impl DisplaySlot {
    pub fn element_id(self) -> &'static str {
        self.into()
    }
}

/// Surface receiving indicator text and sign classes
pub trait DisplaySurface {
    fn set_text(&mut self, slot: DisplaySlot, text: &str);
    fn set_class(&mut self, slot: DisplaySlot, class: SignClass);
}

/// Writes indicators into the page by element id
#[derive(Debug, Clone, Default)]
pub struct DomDisplay;

impl DomDisplay {
    pub fn new() -> Self {
        Self
    }

    fn element(slot: DisplaySlot) -> Option<web_sys::Element> {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(slot.element_id()));
        if element.is_none() {
            get_logger().warn(
                LogComponent::Infrastructure("DomDisplay"),
                &format!("element '{}' not found in DOM", slot.element_id()),
            );
        }
        element
    }
}

impl DisplaySurface for DomDisplay {
    fn set_text(&mut self, slot: DisplaySlot, text: &str) {
        if let Some(element) = Self::element(slot) {
            element.set_text_content(Some(text));
        }
    }

    fn set_class(&mut self, slot: DisplaySlot, class: SignClass) {
        if let Some(element) = Self::element(slot) {
            element.set_class_name(&class.class_name());
        }
    }
}
