//! Reusable page building blocks.

mod cards;
mod charts;
mod controls;
mod dialog;
pub mod download;
mod loading;
mod quick_input;
mod transaction_form;
mod transaction_list;

pub use cards::{
    AssetCard, BudgetCard, MonthlyBudgetCard, ProgressBar, SavingsCard, SummaryCard, SummaryCards,
    Tone,
};
pub use charts::{arc_path, bar_height, breakdown_slices, pie_slices, CategoryBars, CategoryPie, Slice, TimeSeriesChart, TrendChart};
pub use controls::{MonthPicker, PaidBySelector, ScopeToggle};
pub use dialog::{Alert, ConfirmDialog, Modal};
pub use download::save_csv;
pub use loading::{EmptyState, LoadingSpinner, PageSkeleton};
pub use quick_input::{
    use_data_version, use_quick_categories, DataVersion, QuickCategoryBar, QuickCategorySettings,
    QuickEntryProvider, QuickInputDialog, QuickInputFab,
};
pub use transaction_form::TransactionForm;
pub use transaction_list::TransactionList;
