//! Wire models for the Kakepple backend.

mod admin;
mod analytics;
mod asset;
mod budget;
pub mod categories;
mod couple;
mod notification;
mod recurring;
mod transaction;
mod user;

pub use admin::{
    AdminCouple, AdminStats, AdminTransaction, AdminTransactionQuery, AdminUser, AdminUserUpdate,
    CoupleListResponse, Page, TransactionListResponse, UserListQuery, UserListResponse,
    ADMIN_MAX_PAGE_SIZE, ADMIN_PAGE_SIZE,
};
pub use analytics::{
    recent_trends, CategoryAnalysis, CategoryAnalysisQuery, CategoryBreakdown, MonthlyTrend,
    MonthlyTrendsQuery, ReportData, ReportPeriod, ReportQuery, SavingsData, TimeSeriesData,
    YearlyTrend, YearlyTrendsQuery,
};
pub(crate) use asset::AssetTypes;
pub use asset::{total_assets, Asset, AssetCreate, AssetType, AssetUpdate};
pub(crate) use budget::ScopeQuery;
pub use budget::{Budget, BudgetCreate, BudgetFilter, BudgetSummary, BudgetType, BudgetUpdate};
pub(crate) use couple::{InviteRequest, JoinRequest};
pub use couple::{Couple, InviteCode};
pub use notification::{NotificationKind, NotificationPreferences, NotificationPreferencesUpdate};
pub use recurring::{
    ExecuteResult, Frequency, RecurringCreate, RecurringFilter, RecurringTransaction,
    RecurringUpdate, WEEKDAY_LABELS,
};
pub use transaction::{
    Scope, SummaryQuery, Transaction, TransactionCreate, TransactionFilter, TransactionSummary,
    TransactionType, TransactionUpdate,
};
pub(crate) use user::{PasswordResetRequest, RefreshRequest};
pub use user::{
    AuthResponse, AuthUser, LoginRequest, MessageResponse, OAuthPendingInfo,
    PasswordResetConfirm, ProfileUpdate, RegisterRequest, User,
};
