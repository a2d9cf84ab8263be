/// Top-level areas that can hold keyboard focus, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusArea {
    #[default]
    Search,
    Orders,
    Details,
}

impl FocusArea {
    pub fn next(self) -> Self {
        match self {
            FocusArea::Search => FocusArea::Orders,
            FocusArea::Orders => FocusArea::Details,
            FocusArea::Details => FocusArea::Search,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FocusArea::Search => FocusArea::Details,
            FocusArea::Orders => FocusArea::Search,
            FocusArea::Details => FocusArea::Orders,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    FocusNext,
    FocusPrevious,
    ShowOrder(u32),

    // Order editing
    NewOrder,
    PlaceOrder(u32),
    AddComment(u32, String),

    // App control
    Render,
    Quit,
    None,
}
