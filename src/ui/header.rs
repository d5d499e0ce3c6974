/// Style flags of the page header, derived from scroll and menu state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HeaderClasses {
    pub scrolled: bool,
    pub menu_open: bool,
    /// Drop shadow once the header floats over content or a menu hangs off it.
    pub elevated: bool,
    /// Blends into the hero section at the very top of the page.
    pub transparent: bool,
}

impl HeaderClasses {
    pub fn new(scrolled: bool, menu_open: bool) -> Self {
        Self {
            scrolled,
            menu_open,
            elevated: scrolled || menu_open,
            transparent: !scrolled && !menu_open,
        }
    }

    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["header"];
        if self.scrolled {
            classes.push("header--scrolled");
        }
        if self.menu_open {
            classes.push("header--menu-open");
        }
        if self.elevated {
            classes.push("shadow-md");
        }
        if self.transparent {
            classes.push("bg-transparent");
        }
        classes
    }

    pub fn class_string(&self) -> String {
        self.classes().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_table() {
        assert_eq!(
            HeaderClasses::new(false, false).class_string(),
            "header bg-transparent"
        );
        assert_eq!(
            HeaderClasses::new(true, false).class_string(),
            "header header--scrolled shadow-md"
        );
        assert_eq!(
            HeaderClasses::new(false, true).class_string(),
            "header header--menu-open shadow-md"
        );
        assert_eq!(
            HeaderClasses::new(true, true).class_string(),
            "header header--scrolled header--menu-open shadow-md"
        );
    }

    #[test]
    fn elevated_and_transparent_are_exclusive() {
        for scrolled in [false, true] {
            for menu_open in [false, true] {
                let classes = HeaderClasses::new(scrolled, menu_open);
                assert_ne!(classes.elevated, classes.transparent);
            }
        }
    }
}
