// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change summaries returned from controller operations.

bitflags::bitflags! {
    /// What a host needs to rewrite after an operation.
    ///
    /// An empty set means the operation was a no-op. After construction
    /// nothing has been rendered yet, so hosts render every affordance once.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// The track offset changed; rewrite the track transform.
        const OFFSET       = 0b0000_0001;
        /// Previous/next disabled state changed.
        const BUTTONS      = 0b0000_0010;
        /// The number of paging dots changed; recreate them.
        const DOTS_REBUILT = 0b0000_0100;
        /// The highlighted paging dot changed.
        const ACTIVE_DOT   = 0b0000_1000;
        /// The drag cursor changed.
        const CURSOR       = 0b0001_0000;
    }
}

impl Changes {
    /// Returns `true` if the item shown changed, so dependent views may refresh.
    #[must_use]
    pub const fn moved(self) -> bool {
        self.contains(Self::OFFSET)
    }
}
