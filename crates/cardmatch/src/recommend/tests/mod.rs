mod common;
mod eligibility;
mod profile;
