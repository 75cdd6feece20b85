use crate::{
    currency::CurrencyFormatter,
    text_table::{Alignment, TextTableBuilder, combine_sections},
};
use splitledger_application::ParticipantDirectory;
use splitledger_domain::{ParticipantId, SpendingSummary};
use splitledger_i18n as i18n;
use std::borrow::Cow;

pub struct SpendingPresenter;

impl SpendingPresenter {
    pub fn render_text(
        summary: &SpendingSummary,
        directory: &dyn ParticipantDirectory,
        formatter: &CurrencyFormatter,
    ) -> String {
        let count = summary.expense_count.to_string();
        let participants = summary.participant_count.to_string();
        let figures = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed(i18n::SPENDING_TITLE), Cow::Borrowed("")])
            .row([
                Cow::Borrowed(i18n::TOTAL_SPENT),
                Cow::Owned(formatter.format(summary.total)),
            ])
            .row([Cow::Borrowed(i18n::EXPENSE_COUNT), Cow::Borrowed(count.as_str())])
            .row([
                Cow::Borrowed(i18n::PARTICIPANT_COUNT),
                Cow::Borrowed(participants.as_str()),
            ])
            .row([
                Cow::Borrowed(i18n::AVERAGE_EXPENSE),
                Cow::Owned(formatter.format(summary.average)),
            ])
            .row([
                Cow::Borrowed(i18n::HIGHEST_EXPENSE),
                Cow::Owned(formatter.format(summary.highest)),
            ])
            .build();

        if summary.top_payers.is_empty() {
            return figures;
        }

        let payers = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed(i18n::TOP_PAYERS), Cow::Borrowed(i18n::AMOUNT)])
            .rows(summary.top_payers.iter().map(|(id, amount)| {
                [
                    member_label(id, directory),
                    Cow::Owned(formatter.format(*amount)),
                ]
            }))
            .build();

        combine_sections(&[&figures, &payers]).unwrap_or_default()
    }
}

fn member_label<'a>(id: &'a ParticipantId, directory: &'a dyn ParticipantDirectory) -> Cow<'a, str> {
    Cow::Borrowed(directory.display_name(id).unwrap_or(id.as_str()))
}
