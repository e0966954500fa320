//! Scan session: the scan → create/adjust flow as an explicit state machine
//!
//! ```text
//!  Idle ──begin_scan──▶ Resolving ──resolve──▶ AdjustingQuantity  (Found)
//!    ▲                                    └──▶ CreatingItem       (FoundElsewhere / NotFound)
//!    └──────── submit_item / confirm_adjustment / cancel ─────────┘
//! ```
//!
//! Rejected input keeps the current dialog state; `cancel` always returns to
//! `Idle` without touching the store.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::{InventoryStore, Resolution};
use crate::error::{InventoryError, InventoryResult};
use crate::models::{Direction, ItemDraft, ItemRecord, UserRole};
use crate::validation::{parse_amount, validate_scan_code};

/// Where the session is in the scan flow
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Idle,
    Resolving {
        code: String,
    },
    /// Item form is open for a code unknown to `warehouse`
    CreatingItem {
        warehouse: String,
        code: String,
        prefill: ItemDraft,
        /// Warehouse the prefill was copied from, if any
        source_warehouse: Option<String>,
    },
    /// Check-in/out dialog is open for a stocked code
    AdjustingQuantity {
        warehouse: String,
        code: String,
        record: ItemRecord,
    },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Resolving { .. } => "resolving",
            SessionState::CreatingItem { .. } => "creating_item",
            SessionState::AdjustingQuantity { .. } => "adjusting_quantity",
        }
    }
}

/// What a scan input source produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanInput {
    Code(String),
    Cancelled,
}

/// Anything that can produce a scan code: a camera decoder, a keyboard
/// wedge, a typed prompt
pub trait ScanSource {
    /// Capture one code. An `Err` means the source itself is unavailable
    /// (camera denied, device missing) and the caller should fall back to
    /// manual entry.
    fn capture(&mut self) -> InventoryResult<ScanInput>;
}

/// Codes typed in by hand, consumed in order
#[derive(Debug, Clone, Default)]
pub struct ManualEntry {
    pending: VecDeque<String>,
}

impl ManualEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, code: impl Into<String>) {
        self.pending.push_back(code.into());
    }
}

impl ScanSource for ManualEntry {
    fn capture(&mut self) -> InventoryResult<ScanInput> {
        Ok(match self.pending.pop_front() {
            Some(code) => ScanInput::Code(code),
            None => ScanInput::Cancelled,
        })
    }
}

/// One operator's walk through scan, create and adjust
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanSession {
    user: Option<UserRole>,
    state: SessionState,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(user: UserRole) -> Self {
        Self {
            user: Some(user),
            state: SessionState::Idle,
        }
    }

    pub fn user(&self) -> Option<UserRole> {
        self.user
    }

    /// Switch the acting role; any open dialog is abandoned
    pub fn select_user(&mut self, user: UserRole) {
        self.user = Some(user);
        self.state = SessionState::Idle;
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn actor(&self) -> InventoryResult<UserRole> {
        self.user.ok_or(InventoryError::NoActingUser)
    }

    fn invalid(&self, event: &'static str) -> InventoryError {
        InventoryError::InvalidTransition {
            state: self.state.name(),
            event,
        }
    }

    /// Idle → Resolving
    pub fn begin_scan(&mut self, code: &str) -> InventoryResult<()> {
        if self.state != SessionState::Idle {
            return Err(self.invalid("scan"));
        }
        validate_scan_code(code)?;
        self.state = SessionState::Resolving {
            code: code.to_string(),
        };
        Ok(())
    }

    /// Resolving → AdjustingQuantity | CreatingItem
    ///
    /// Without an active warehouse the session falls back to Idle.
    pub fn resolve(&mut self, store: &InventoryStore) -> InventoryResult<&SessionState> {
        let code = match &self.state {
            SessionState::Resolving { code } => code.clone(),
            _ => return Err(self.invalid("resolve")),
        };
        let Some(warehouse) = store.active_warehouse().map(str::to_string) else {
            self.state = SessionState::Idle;
            return Err(InventoryError::NoActiveWarehouse);
        };

        self.state = match store.resolve(&code, &warehouse) {
            Resolution::Found { record } => SessionState::AdjustingQuantity {
                warehouse,
                code,
                record,
            },
            Resolution::FoundElsewhere {
                source_warehouse,
                template,
            } => SessionState::CreatingItem {
                warehouse,
                code,
                prefill: template,
                source_warehouse: Some(source_warehouse),
            },
            Resolution::NotFound => SessionState::CreatingItem {
                warehouse,
                code,
                prefill: ItemDraft::default(),
                source_warehouse: None,
            },
        };
        Ok(&self.state)
    }

    /// Begin and resolve in one step
    pub fn scan(&mut self, store: &InventoryStore, code: &str) -> InventoryResult<&SessionState> {
        if store.active_warehouse().is_none() {
            return Err(InventoryError::NoActiveWarehouse);
        }
        self.begin_scan(code)?;
        self.resolve(store)
    }

    /// Capture a code from `source` and scan it
    ///
    /// Returns `Ok(None)` when the source was cancelled. Source failures are
    /// passed through with the session still Idle.
    pub fn scan_from(
        &mut self,
        store: &InventoryStore,
        source: &mut dyn ScanSource,
    ) -> InventoryResult<Option<&SessionState>> {
        if self.state != SessionState::Idle {
            return Err(self.invalid("scan"));
        }
        match source.capture()? {
            ScanInput::Code(code) => self.scan(store, &code).map(Some),
            ScanInput::Cancelled => Ok(None),
        }
    }

    /// CreatingItem → Idle, writing the submitted form
    pub fn submit_item(
        &mut self,
        store: &mut InventoryStore,
        draft: ItemDraft,
    ) -> InventoryResult<ItemRecord> {
        let (warehouse, code) = match &self.state {
            SessionState::CreatingItem {
                warehouse, code, ..
            } => (warehouse.clone(), code.clone()),
            _ => return Err(self.invalid("submit item")),
        };
        let actor = self.actor()?;
        let fields = draft.into_fields()?;
        let record = store.put(&warehouse, &code, fields, actor)?.clone();
        self.state = SessionState::Idle;
        Ok(record)
    }

    /// AdjustingQuantity → Idle, applying the typed amount
    ///
    /// The ledger works on the currently stored record, not the snapshot
    /// taken when the dialog opened.
    pub fn confirm_adjustment(
        &mut self,
        store: &mut InventoryStore,
        direction: Direction,
        amount: &str,
    ) -> InventoryResult<ItemRecord> {
        let (warehouse, code) = match &self.state {
            SessionState::AdjustingQuantity {
                warehouse, code, ..
            } => (warehouse.clone(), code.clone()),
            _ => return Err(self.invalid("adjust quantity")),
        };
        let actor = self.actor()?;
        let amount = parse_amount(amount)?;
        let record = store
            .adjust_quantity(&warehouse, &code, direction, amount, actor)?
            .clone();
        self.state = SessionState::Idle;
        Ok(record)
    }

    /// Abandon whatever dialog is open
    pub fn cancel(&mut self) {
        self.state = SessionState::Idle;
    }
}
