//! `#[derive(AutoService)]` 端到端测试
//!
//! 测试位于 `tests/` 目录，每个测试二进制拥有独立的进程级类型表。
//!
//! `#[implements]` 声明的接口在编译期核对：
//!
//! ```
//! use auto_service_macros::AutoService;
//!
//! pub trait Clock {}
//!
//! #[derive(AutoService)]
//! #[implements(dyn Clock)]
//! #[auto_service(singleton, all_interfaces)]
//! pub struct SystemClock;
//!
//! impl Clock for SystemClock {}
//! ```
//!
//! 类型没有实现声明的接口时无法编译：
//!
//! ```compile_fail
//! use auto_service_macros::AutoService;
//!
//! pub trait Clock {}
//!
//! #[derive(AutoService)]
//! #[implements(dyn Clock)]
//! #[auto_service(singleton, all_interfaces)]
//! pub struct SystemClock;
//! ```
