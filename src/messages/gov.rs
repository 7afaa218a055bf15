// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Governance operations: votes and proposal submissions.

use prost::Message;
use tracing::{error, info, warn};

use crate::proto;
use crate::proto::gov::VoteOption;
use crate::render::RenderContext;

/// A governance vote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vote {
    pub proposal_id: u64,
    pub voter: String,
    /// Canonical option name (`VOTE_OPTION_YES`, ...)
    pub option: String,
}

impl Vote {
    pub fn is_empty(&self) -> bool {
        self.voter.is_empty()
    }

    pub fn parse(payload: &[u8]) -> Self {
        let parsed = match proto::gov::MsgVote::decode(payload) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!(error = %e, "Could not parse MsgVote");
                return Self::default();
            }
        };

        let option = VoteOption::try_from(parsed.option)
            .map(|o| o.as_str_name().to_string())
            .unwrap_or_else(|_| parsed.option.to_string());

        info!(
            proposal_id = parsed.proposal_id,
            voter = %parsed.voter,
            option = %option,
            "MsgVote"
        );

        Self {
            proposal_id: parsed.proposal_id,
            voter: parsed.voter,
            option,
        }
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        format!(
            "{}\n{} {}\n{} {}\n{} {}",
            ctx.markup.strong("Vote"),
            ctx.markup.strong("Voted:"),
            self.option,
            ctx.markup.strong("Proposal ID:"),
            self.proposal_id,
            ctx.markup.strong("Voter:"),
            self.voter,
        )
    }
}

/// A new governance proposal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitProposal {
    pub title: String,
    pub description: String,
    pub proposer: String,
}

impl SubmitProposal {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
    }

    pub fn parse(payload: &[u8]) -> Self {
        let parsed = match proto::gov::MsgSubmitProposal::decode(payload) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!(error = %e, "Could not parse MsgSubmitProposal");
                return Self::default();
            }
        };

        // The content Any decodes through the generic title/description view
        // shared by all standard proposal content types.
        let content = match parsed.content {
            Some(any) => match proto::gov::ProposalContent::decode(any.value.as_slice()) {
                Ok(content) => content,
                Err(e) => {
                    warn!(type_url = %any.type_url, error = %e, "Could not parse proposal content");
                    proto::gov::ProposalContent::default()
                }
            },
            None => proto::gov::ProposalContent::default(),
        };

        info!(
            title = %content.title,
            proposer = %parsed.proposer,
            "MsgSubmitProposal"
        );

        Self {
            title: content.title,
            description: content.description,
            proposer: parsed.proposer,
        }
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        format!(
            "{}\n{}\n{} {}\n{} {}\n{} {}",
            ctx.markup.strong("New proposal"),
            ctx.markup.link(&ctx.links.proposals(), "Mintscan"),
            ctx.markup.strong("Proposer:"),
            ctx.markup
                .link(&ctx.links.account(&self.proposer), &self.proposer),
            ctx.markup.strong("Title:"),
            ctx.single_or_multiline_code(&self.title),
            ctx.markup.strong("Description:"),
            ctx.single_or_multiline_code(&self.description),
        )
    }
}
