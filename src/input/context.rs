//! Input context for determining which commands are available.

use crate::view_state::{ClubFocus, DashboardView, Modal, Section};

/// The type of modal dialog currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    /// No modal dialog is active
    #[default]
    None,
    Alert,
    Confirm,
    /// Club or member form
    Form,
}

/// What the key registry needs to know about the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub modal: ModalType,
    pub section: Section,
    pub club_focus: ClubFocus,
}

impl InputContext {
    pub fn from_view(view: &DashboardView) -> Self {
        let modal = match view.modal() {
            None => ModalType::None,
            Some(Modal::Alert(_)) => ModalType::Alert,
            Some(Modal::Confirm(_)) => ModalType::Confirm,
            Some(Modal::ClubForm(_)) | Some(Modal::MemberForm(_)) => ModalType::Form,
        };
        Self {
            modal,
            section: view.visible,
            club_focus: view.club_focus,
        }
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Renderer;

    #[test]
    fn test_context_tracks_topmost_modal() {
        let mut view = DashboardView::new();
        assert!(!InputContext::from_view(&view).is_modal_active());

        view.form = Some(Default::default());
        assert_eq!(InputContext::from_view(&view).modal, ModalType::Form);

        view.alert("Club code must be 18 digits");
        assert_eq!(InputContext::from_view(&view).modal, ModalType::Alert);
    }
}
