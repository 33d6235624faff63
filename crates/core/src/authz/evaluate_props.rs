//! Property-based tests for the authorization evaluator.

use proptest::prelude::*;

use atlas_shared::{Principal, Role};

use crate::authz::evaluate::{AccessDecision, evaluate};

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Client), Just(Role::Agent), Just(Role::Admin)]
}

fn arb_role_set() -> impl Strategy<Value = Vec<Role>> {
    proptest::collection::vec(arb_role(), 0..=3)
}

fn principal(role: Role, token: &str) -> Principal {
    Principal {
        email: "a@b.com".into(),
        display_name: "A B".into(),
        role,
        account_number: None,
        token: token.into(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Without an authenticated principal the answer is always the login
    /// redirect, whatever the required roles.
    #[test]
    fn prop_no_principal_always_login(required in arb_role_set()) {
        prop_assert_eq!(evaluate(None, &required), AccessDecision::deny_to_login());
    }

    /// An empty token never passes, even with a matching role.
    #[test]
    fn prop_empty_token_always_login(role in arb_role(), required in arb_role_set()) {
        let p = principal(role, "");
        prop_assert_eq!(evaluate(Some(&p), &required), AccessDecision::deny_to_login());
    }

    /// Access is granted exactly when the role set is empty or contains
    /// the principal's role.
    #[test]
    fn prop_allow_iff_role_in_set(role in arb_role(), required in arb_role_set()) {
        let p = principal(role, "tok");
        let decision = evaluate(Some(&p), &required);
        let expected = required.is_empty() || required.contains(&role);
        prop_assert_eq!(decision.is_allowed(), expected);
    }

    /// An authenticated denial always redirects to the principal's own
    /// role home, never to login or another role's home.
    #[test]
    fn prop_denied_authenticated_goes_home(role in arb_role(), required in arb_role_set()) {
        let p = principal(role, "tok");
        if let AccessDecision::Deny { redirect_to } = evaluate(Some(&p), &required) {
            prop_assert_eq!(redirect_to, role.home_path());
        }
    }
}
