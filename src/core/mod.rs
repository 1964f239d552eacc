pub mod campaign;
pub mod datasource;
pub mod reports;
pub mod scenario;
pub mod seed;
pub mod target;
pub mod tool;

// Re-exports for convenience
pub use campaign::{
    aggregate, AttackType, Campaign, CampaignAction, CampaignAggregate, CampaignDraft,
    CampaignError, CampaignResult, CampaignStatus, CampaignStore,
};
pub use datasource::{
    DataSource, DataSourceCategory, DataSourceDraft, DataSourceError, DataSourceResult,
    DataSourceStore, SyncStatus,
};
pub use reports::{
    trend, DepartmentStat, MonthlyStat, ReportSummary, TrendDirection,
};
pub use scenario::{
    HarvestField, ScenarioContent, ScenarioDraft, ScenarioError, ScenarioResult, ScenarioStatus,
    ScenarioStore, ScenarioTemplate,
};
pub use target::{
    risk_distribution, RiskDistribution, RiskLevel, Target, TargetDraft, TargetError,
    TargetResult, TargetStore,
};
pub use tool::{
    AttackTool, ToolCategory, ToolDraft, ToolError, ToolResult, ToolStatus, ToolStore,
};
