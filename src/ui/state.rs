use crate::ui::header::HeaderClasses;
use crate::ui::scroll::ScrollMetrics;

/// The menus hanging off the header. At most one is open at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Menu {
    Mobile,
    Search,
    Profile,
    Notifications,
}

impl Menu {
    pub const ALL: [Menu; 4] = [
        Menu::Mobile,
        Menu::Search,
        Menu::Profile,
        Menu::Notifications,
    ];
}

/// Snapshot of the shell state.
///
/// Open menus are stored as a single `Option<Menu>`, so opening one menu
/// closes whichever was open before. Transitions return `true` when they
/// changed anything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    open_menu: Option<Menu>,
    is_scrolled: bool,
    scroll_progress: f64,
    active_nav_item: Option<String>,
}

impl UiState {
    pub fn open_menu(&self) -> Option<Menu> {
        self.open_menu
    }

    pub fn is_open(&self, menu: Menu) -> bool {
        self.open_menu == Some(menu)
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.is_open(Menu::Mobile)
    }

    pub fn search_open(&self) -> bool {
        self.is_open(Menu::Search)
    }

    pub fn profile_menu_open(&self) -> bool {
        self.is_open(Menu::Profile)
    }

    pub fn notifications_open(&self) -> bool {
        self.is_open(Menu::Notifications)
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn scroll_progress(&self) -> f64 {
        self.scroll_progress
    }

    pub fn active_nav_item(&self) -> Option<&str> {
        self.active_nav_item.as_deref()
    }

    pub fn is_any_menu_open(&self) -> bool {
        self.open_menu.is_some()
    }

    pub fn header_classes(&self) -> HeaderClasses {
        HeaderClasses::new(self.is_scrolled, self.is_any_menu_open())
    }

    /// Opens `menu`, closing any other, or closes it if it was already open.
    pub fn toggle(&mut self, menu: Menu) -> bool {
        self.open_menu = if self.is_open(menu) { None } else { Some(menu) };
        true
    }

    pub fn close_all_menus(&mut self) -> bool {
        self.open_menu.take().is_some()
    }

    pub fn set_active_nav_item(&mut self, item: Option<String>) -> bool {
        if self.active_nav_item == item {
            return false;
        }
        self.active_nav_item = item;
        true
    }

    pub fn reset_scroll_state(&mut self) -> bool {
        self.set_scroll(false, 0.0)
    }

    pub fn apply_scroll(&mut self, metrics: &ScrollMetrics) -> bool {
        self.set_scroll(metrics.is_scrolled(), metrics.progress())
    }

    fn set_scroll(&mut self, is_scrolled: bool, progress: f64) -> bool {
        if self.is_scrolled == is_scrolled && self.scroll_progress == progress {
            return false;
        }
        self.is_scrolled = is_scrolled;
        self.scroll_progress = progress;
        true
    }
}
