// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entrance classes and stagger delays assigned before elements are observed.

/// Class added to an element once it has been revealed.
pub const VISIBLE_CLASS: &str = "visible";

/// Entrance animation an element starts in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealClass {
    /// Opacity only.
    FadeIn,
    /// Opacity with a short upward travel.
    FadeInUp,
    /// Longer upward travel.
    SlideUp,
    /// Enters from the left.
    SlideInLeft,
    /// Enters from the right.
    SlideInRight,
}

impl RevealClass {
    /// All classes; every element carrying one of these is observed.
    pub const ALL: [Self; 5] = [
        Self::FadeIn,
        Self::FadeInUp,
        Self::SlideUp,
        Self::SlideInLeft,
        Self::SlideInRight,
    ];

    /// CSS class name.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::FadeIn => "fade-in",
            Self::FadeInUp => "fade-in-up",
            Self::SlideUp => "slide-up",
            Self::SlideInLeft => "slide-in-left",
            Self::SlideInRight => "slide-in-right",
        }
    }

    /// Looks a class up by CSS name.
    #[must_use]
    pub fn from_class_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.class_name() == name)
    }
}

/// Transition delay step, `1..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stagger(u8);

impl Stagger {
    /// Largest step.
    pub const MAX: u8 = 4;

    /// Creates a step; `None` outside `1..=4`.
    #[must_use]
    pub const fn new(step: u8) -> Option<Self> {
        if step >= 1 && step <= Self::MAX {
            Some(Self(step))
        } else {
            None
        }
    }

    /// The step number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// CSS class name, `stagger-1` through `stagger-4`.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self.0 {
            1 => "stagger-1",
            2 => "stagger-2",
            3 => "stagger-3",
            _ => "stagger-4",
        }
    }
}

/// Cycles through `period` steps: index 0 gets step 1, index `period` gets step 1 again.
///
/// Returns `None` for a period of zero or one longer than [`Stagger::MAX`].
///
/// ```
/// use understory_reveal::cyclic_stagger;
///
/// let steps: Vec<u8> = (0..6).filter_map(|i| cyclic_stagger(i, 4)).map(|s| s.get()).collect();
/// assert_eq!(steps, [1, 2, 3, 4, 1, 2]);
/// ```
#[must_use]
pub fn cyclic_stagger(index: usize, period: usize) -> Option<Stagger> {
    if period == 0 || period > usize::from(Stagger::MAX) {
        return None;
    }
    let step = u8::try_from(index % period + 1).ok()?;
    Stagger::new(step)
}

/// Steps for the first four items of a strip; later items get none.
#[must_use]
pub fn leading_stagger(index: usize) -> Option<Stagger> {
    if index < usize::from(Stagger::MAX) {
        cyclic_stagger(index, usize::from(Stagger::MAX))
    } else {
        None
    }
}

/// Kinds of page element that animate in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// A whole section.
    Section,
    /// A section heading.
    SectionTitle,
    /// A section subheading or label.
    SectionSubtitle,
    /// The `n`th card in the offer grid.
    OfferCard(usize),
    /// The `n`th card in the exam category grid.
    ExamCard(usize),
    /// The founder profile card.
    FounderCard,
    /// The `n`th faculty card.
    FacultyCard(usize),
    /// The `n`th testimonial card.
    TestimonialCard(usize),
    /// Copy in the trust section.
    TrustText,
    /// Illustration in the trust section.
    TrustIllustration,
}

/// Classes an element receives before it is observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entrance {
    /// Entrance animation.
    pub class: RevealClass,
    /// Delay step, if any.
    pub stagger: Option<Stagger>,
}

impl Entrance {
    /// Entrance for an element playing `role`.
    ///
    /// Offer cards cycle through four delay steps and exam cards through
    /// three, matching their grid widths. Faculty and testimonial strips only
    /// stagger their first four cards.
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        let (class, stagger) = match role {
            Role::Section => (RevealClass::FadeIn, None),
            Role::SectionTitle => (RevealClass::FadeInUp, None),
            Role::SectionSubtitle => (RevealClass::FadeInUp, Stagger::new(1)),
            Role::OfferCard(i) => (RevealClass::SlideUp, cyclic_stagger(i, 4)),
            Role::ExamCard(i) => (RevealClass::SlideUp, cyclic_stagger(i, 3)),
            Role::FounderCard => (RevealClass::SlideUp, None),
            Role::FacultyCard(i) => (RevealClass::FadeInUp, leading_stagger(i)),
            Role::TestimonialCard(i) => (RevealClass::SlideUp, leading_stagger(i)),
            Role::TrustText => (RevealClass::SlideInLeft, None),
            Role::TrustIllustration => (RevealClass::SlideInRight, Stagger::new(1)),
        };
        Self { class, stagger }
    }

    /// Class names to add, entrance first.
    pub fn class_names(&self) -> impl Iterator<Item = &'static str> {
        core::iter::once(self.class.class_name()).chain(self.stagger.map(Stagger::class_name))
    }
}
