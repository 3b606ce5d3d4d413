//! # bindiff-view
//!
//! 差分ビューの状態管理。
//!
//! UI フレームワークに依存しない明示的な状態として、
//! - 入力の差し替えと再計算（世代番号による後勝ち）
//! - 差分行間の移動（次へ/前へ、循環）
//! - 状態表示（差分なし/差分あり/上限超過）
//!
//! を提供する。
//!
//! ## 使い方
//!
//! ```
//! use bindiff_core::DiffOptions;
//! use bindiff_view::{DiffSession, DiffStatus};
//!
//! let mut session = DiffSession::new(DiffOptions::default()).unwrap();
//! session.set_left(b"ABC".to_vec());
//! session.set_right(b"AXC".to_vec());
//!
//! // 計算は別スレッドで行ってもよい: session.prepare() → job.run() → session.complete()
//! session.recompute().unwrap();
//! assert_eq!(session.status(), DiffStatus::Differences { lines: 1 });
//! assert_eq!(session.advance().map(|line| line.id), Some(0));
//! ```

#![no_std]
extern crate alloc;

pub mod navigator;
pub mod session;
pub mod status;

pub use navigator::DiffNavigator;
pub use session::{Accepted, DiffJob, DiffOutcome, DiffSession};
pub use status::DiffStatus;
