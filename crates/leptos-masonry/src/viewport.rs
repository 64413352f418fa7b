//! Viewport Model
//!
//! Named width breakpoints and derived device classes.

/// Width breakpoints in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub fn min_width(&self) -> f64 {
        match self {
            Breakpoint::Xs => 0.0,
            Breakpoint::Sm => 640.0,
            Breakpoint::Md => 768.0,
            Breakpoint::Lg => 1024.0,
            Breakpoint::Xl => 1280.0,
            Breakpoint::Xxl => 1536.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.name() == name)
    }

    /// Largest breakpoint whose minimum width is <= `width`
    pub fn for_width(width: f64) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|bp| width >= bp.min_width())
            .unwrap_or(Breakpoint::Xs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Window inner size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::for_width(self.width)
    }

    pub fn orientation(&self) -> Orientation {
        if self.height >= self.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    pub fn is_min_width(&self, bp: Breakpoint) -> bool {
        self.width >= bp.min_width()
    }

    /// Strictly narrower than `bp`
    pub fn is_max_width(&self, bp: Breakpoint) -> bool {
        self.width < bp.min_width()
    }

    pub fn is_between(&self, min: Breakpoint, max: Breakpoint) -> bool {
        self.is_min_width(min) && self.is_max_width(max)
    }

    pub fn is_mobile(&self) -> bool {
        self.is_max_width(Breakpoint::Sm)
    }

    pub fn is_tablet(&self) -> bool {
        self.is_between(Breakpoint::Sm, Breakpoint::Lg)
    }

    pub fn is_desktop(&self) -> bool {
        self.is_min_width(Breakpoint::Lg)
    }
}
