//! Demo Data
//!
//! Fixture builders that populate the stores with a realistic snapshot
//! of a running awareness program. Used by the integration tests and by
//! anything that wants a non-empty workspace out of the box.

use chrono::NaiveDate;

use super::campaign::{AttackType, Campaign, CampaignStatus};
use super::datasource::{DataSource, DataSourceCategory, SyncStatus};
use super::reports::{DepartmentStat, MonthlyStat};
use super::scenario::{HarvestField, ScenarioContent, ScenarioStatus, ScenarioTemplate};
use super::target::{RiskLevel, Target};
use super::tool::{AttackTool, ToolCategory, ToolStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Three campaigns: one scheduled, one running, one completed
pub fn demo_campaigns() -> Vec<Campaign> {
    let mut running = Campaign::new(
        "Q2 Email Phishing Campaign",
        "Fake VCB Bank Phishing",
        AttackType::Email,
    )
    .with_targets(150)
    .with_counts(150, 98, 45, 23)
    .with_window(date(2024, 6, 15), date(2024, 6, 30));
    running.status = CampaignStatus::Running;
    running.progress = 65;

    let mut completed = Campaign::new(
        "Prize Scam SMS Campaign",
        "Prize Scam SMS",
        AttackType::Sms,
    )
    .with_targets(200)
    .with_counts(200, 180, 67, 34)
    .with_window(date(2024, 6, 1), date(2024, 6, 10));
    completed.status = CampaignStatus::Completed;
    completed.progress = 100;

    let scheduled = Campaign::new(
        "Call Bot Test Campaign",
        "Fake Customer Support Call Bot",
        AttackType::Call,
    )
    .with_targets(100)
    .with_window(date(2024, 7, 1), date(2024, 7, 15));

    vec![running, completed, scheduled]
}

/// Three scenario templates, one per delivery channel
pub fn demo_scenarios() -> Vec<ScenarioTemplate> {
    let mut vcb = ScenarioTemplate::new("Fake VCB Bank Phishing", AttackType::Email)
        .with_description("Spoofed bank security alert asking the target to verify their account")
        .with_harvest_targets(vec![
            HarvestField::Username,
            HarvestField::Password,
            HarvestField::Otp,
        ])
        .with_content(ScenarioContent::Email {
            subject: "[Urgent] Your VCB account has been temporarily locked".to_string(),
            body: "Dear customer, unusual activity was detected on your account. \
                   Please verify your identity within 24 hours to avoid suspension."
                .to_string(),
        });
    vcb.status = ScenarioStatus::Active;

    let mut prize = ScenarioTemplate::new("Prize Scam SMS", AttackType::Sms)
        .with_description("Congratulation message promising a prize in exchange for card details")
        .with_harvest_targets(vec![
            HarvestField::Phone,
            HarvestField::CardNumber,
            HarvestField::Cvv,
        ])
        .with_content(ScenarioContent::Sms {
            message: "Congratulations! You have won a 10,000,000 VND voucher. \
                      Claim it now at the link below."
                .to_string(),
        });
    prize.status = ScenarioStatus::Active;

    let call_bot = ScenarioTemplate::new("Fake Customer Support Call Bot", AttackType::Call)
        .with_description("Automated support call that asks the target to read back an OTP")
        .with_harvest_targets(vec![
            HarvestField::Otp,
            HarvestField::Username,
            HarvestField::BirthDate,
        ])
        .with_content(ScenarioContent::Call {
            script: "Hello, this is customer support. We detected a suspicious \
                     transaction. To cancel it, please confirm the code we just sent you."
                .to_string(),
        });

    vec![vcb, prize, call_bot]
}

/// Four roster entries across departments and risk levels
pub fn demo_targets() -> Vec<Target> {
    vec![
        Target::new("Nguyen Van An", "nguyen.van.an@email.com")
            .with_phone("+84 901 234 567")
            .with_department("Accounting")
            .with_risk(RiskLevel::Low)
            .with_history(3, 0),
        Target::new("Tran Thi Binh", "tran.thi.binh@email.com")
            .with_phone("+84 902 345 678")
            .with_department("Human Resources")
            .with_risk(RiskLevel::High)
            .with_history(8, 3),
        Target::new("Le Minh Cuong", "le.minh.cuong@email.com")
            .with_phone("+84 903 456 789")
            .with_department("Engineering")
            .with_risk(RiskLevel::Medium)
            .with_history(5, 1),
        Target::new("Pham Thu Dung", "pham.thu.dung@email.com")
            .with_phone("+84 904 567 890")
            .with_department("Sales")
            .with_risk(RiskLevel::Low)
            .with_history(2, 0),
    ]
}

/// Four catalog entries, one per tool category
pub fn demo_tools() -> Vec<AttackTool> {
    vec![
        AttackTool::new("Email Phishing Template Generator", ToolCategory::Email)
            .with_description("Builds spoofed corporate emails with tracked links")
            .with_features(vec![
                "Link tracking".to_string(),
                "Open tracking".to_string(),
                "Template library".to_string(),
            ])
            .with_status(ToolStatus::Active),
        AttackTool::new("Voice Call Bot", ToolCategory::Call)
            .with_description("Scripted robocaller for vishing exercises")
            .with_features(vec![
                "Text to speech".to_string(),
                "Call recording".to_string(),
            ])
            .with_status(ToolStatus::Active),
        AttackTool::new("Banking Site Clone Kit", ToolCategory::Website)
            .with_description("Clones a login page and captures submitted credentials")
            .with_features(vec![
                "Page cloning".to_string(),
                "Credential capture".to_string(),
            ])
            .with_status(ToolStatus::Draft),
        AttackTool::new("Attachment Payload Simulator", ToolCategory::Malware)
            .with_description("Harmless office attachment that reports when opened")
            .with_features(vec!["Open beacon".to_string()])
            .with_status(ToolStatus::Inactive),
    ]
}

/// Five data sources across the catalog categories
pub fn demo_data_sources() -> Vec<DataSource> {
    let mut virustotal = DataSource::new("VirusTotal API", DataSourceCategory::ThreatIntelligence)
        .with_description("Malicious domain and IP intelligence")
        .with_credential("vt_4f6a8c2e91d37b05");
    virustotal.sync_status = SyncStatus::Active;
    virustotal.records_collected = 15_420;

    let mut shodan = DataSource::new("Shodan API", DataSourceCategory::ThreatIntelligence)
        .with_description("Exposed service and device reconnaissance")
        .with_credential("sh_9b2d5f7a3c81e406");
    shodan.sync_status = SyncStatus::Error;
    shodan.records_collected = 2_890;

    let mut linkedin = DataSource::new("LinkedIn API", DataSourceCategory::SocialMedia)
        .with_description("Professional profile collection for pretexting")
        .with_credential("li_7c4e2a9f5d63b801");
    linkedin.sync_status = SyncStatus::Active;
    linkedin.records_collected = 8_750;

    let mut roster_import = DataSource::new("HR Staff Sheet", DataSourceCategory::FileImport)
        .with_description("Quarterly employee roster upload");
    roster_import.sync_status = SyncStatus::Completed;
    roster_import.records_collected = 1_240;

    let webhook = DataSource::new("Incident Webhook", DataSourceCategory::CustomApi)
        .with_description("Internal SOC feed of reported phishing attempts")
        .with_credential("wh_1f8b3d6c4a92e705")
        .with_config("endpoint", serde_json::json!("https://soc.internal/hooks/phish"))
        .with_config("rateLimit", serde_json::json!(1000));

    vec![virustotal, shodan, linkedin, roster_import, webhook]
}

/// Six months of campaign outcomes, January through June
pub fn demo_monthly_stats() -> Vec<MonthlyStat> {
    vec![
        MonthlyStat::new("Jan", 4, 420, 156, 37),
        MonthlyStat::new("Feb", 6, 580, 198, 34),
        MonthlyStat::new("Mar", 8, 720, 165, 23),
        MonthlyStat::new("Apr", 5, 450, 189, 42),
        MonthlyStat::new("May", 7, 690, 145, 21),
        MonthlyStat::new("Jun", 9, 820, 267, 33),
    ]
}

/// Per-department outcomes over the same period
pub fn demo_department_stats() -> Vec<DepartmentStat> {
    vec![
        DepartmentStat::new("Accounting", 45, 18),
        DepartmentStat::new("Human Resources", 32, 8),
        DepartmentStat::new("Sales", 67, 23),
        DepartmentStat::new("Engineering", 28, 4),
        DepartmentStat::new("Operations", 39, 15),
    ]
}

// ============================================================================
// Tests
// ============================================================================
