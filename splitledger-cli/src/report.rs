use serde::Serialize;
use splitledger_application::{LedgerError, LedgerProcessor, SettlementResult};
use splitledger_domain::SpendingSummary;
use splitledger_infrastructure::GroupSnapshot;
use splitledger_presentation::{
    BalancesPresenter, BalancesView, CurrencyFormatter, SpendingPresenter, combine_sections,
};

/// Everything printed for one group, in either output format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupReport {
    pub group_id: String,
    pub group_name: String,
    pub currency: String,
    pub settlement: SettlementResult,
    pub view: BalancesView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SpendingSummary>,
    #[serde(skip)]
    residual: Option<String>,
    #[serde(skip)]
    text: String,
}

impl GroupReport {
    pub fn build(
        processor: &LedgerProcessor<'_>,
        snapshot: &GroupSnapshot,
        with_stats: bool,
    ) -> Result<Self, LedgerError> {
        let settlement = processor.settle_group(&snapshot.group_id)?;
        let summary = if with_stats {
            Some(processor.summarize_group(&snapshot.group_id)?)
        } else {
            None
        };

        let directory = snapshot.directory();
        let formatter = CurrencyFormatter::new(snapshot.currency.as_str());
        let view = BalancesPresenter::new(&directory, &formatter).present(&settlement);

        let residual = (!settlement.is_fully_settled())
            .then(|| formatter.format(settlement.unbalanced_total));

        let heading = format!("== {} ==\n", snapshot.group_name);
        let balances = view.render_text();
        let stats = summary
            .as_ref()
            .map(|summary| SpendingPresenter::render_text(summary, &directory, &formatter));
        let mut sections = vec![heading.as_str(), balances.as_str()];
        if let Some(stats) = &stats {
            sections.push(stats.as_str());
        }
        let text = combine_sections(&sections).unwrap_or_default();

        Ok(Self {
            group_id: snapshot.group_id.to_string(),
            group_name: snapshot.group_name.clone(),
            currency: snapshot.currency.clone(),
            settlement,
            view,
            summary,
            residual,
            text,
        })
    }

    pub fn residual_warning(&self) -> Option<String> {
        self.residual
            .as_ref()
            .map(|amount| splitledger_i18n::unsettled_residual(amount.as_str()).to_string())
    }

    pub fn render_text(&self) -> String {
        self.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use splitledger_domain::SettlementPlanner;
    use splitledger_infrastructure::JsonExpenseSource;

    const DINNER: &str = r#"{
        "groupId": "dinner",
        "groupName": "Friday dinner",
        "currency": "$",
        "participants": [
            { "id": "a", "name": "Alice" },
            { "id": "b", "name": "Bob" }
        ],
        "expenses": [
            {
                "amount": 5000,
                "paidBy": "a",
                "paidFor": [
                    { "participant": "a", "amount": 2500 },
                    { "participant": "b", "amount": 2400 }
                ]
            }
        ]
    }"#;

    #[fixture]
    fn source() -> JsonExpenseSource {
        let mut source = JsonExpenseSource::new();
        source
            .insert(GroupSnapshot::from_json(DINNER).expect("fixture parses"))
            .expect("single group");
        source
    }

    fn report(source: &JsonExpenseSource, with_stats: bool) -> GroupReport {
        let processor = LedgerProcessor::new(source, &SettlementPlanner);
        let snapshot = source.groups().next().expect("one group");
        GroupReport::build(&processor, snapshot, with_stats).expect("report builds")
    }

    #[rstest]
    fn text_report_names_group_and_transfers(source: JsonExpenseSource) {
        let report = report(&source, false);
        let text = report.render_text();

        assert!(text.starts_with("== Friday dinner =="));
        assert!(text.contains("Bob"));
        assert!(text.contains("$24.00"));
        assert!(report.summary.is_none());
    }

    #[rstest]
    fn skewed_expense_produces_residual_warning(source: JsonExpenseSource) {
        let report = report(&source, false);

        let warning = report.residual_warning().expect("shares are short by 100");
        assert!(warning.contains("$1.00"));
    }

    #[rstest]
    fn json_report_includes_summary_when_requested(source: JsonExpenseSource) {
        let report = report(&source, true);
        let json = serde_json::to_value(&report).expect("report serializes");

        assert_eq!(json["groupId"], "dinner");
        assert_eq!(json["settlement"]["transfers"][0]["amount"], 2400);
        assert_eq!(json["summary"]["total"], 5000);
        assert!(json.get("text").is_none());
    }
}
