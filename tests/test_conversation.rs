//! End-to-end properties of role-prompt assembly and conversation state.

use senmon_assistant::chat::{Conversation, EntryRole, RolePrompt, EMPTY_REQUEST_MESSAGE};
use senmon_assistant::roles::SpecialistRole;

fn submit(conv: &mut Conversation, prompt: &RolePrompt, role: SpecialistRole, request: &str) {
    conv.push_exchange(prompt.render(role), request);
}

#[test]
fn every_role_label_appears_verbatim_in_its_system_entry() {
    let prompt = RolePrompt::built_in();
    for role in SpecialistRole::ALL {
        let mut conv = Conversation::new();
        submit(&mut conv, &prompt, role, "何かアドバイスをください");
        let system = &conv.entries()[0];
        assert_eq!(system.role, EntryRole::System);
        assert!(
            system.content.contains(role.label()),
            "system entry for {role} should contain its label"
        );
    }
}

#[test]
fn finance_example_exchange() {
    let prompt = RolePrompt::built_in();
    let mut conv = Conversation::new();
    submit(
        &mut conv,
        &prompt,
        SpecialistRole::Finance,
        "来月の予算配分について相談したい",
    );

    let system = &conv.entries()[0];
    assert!(system.content.starts_with("あなたは財務分析、投資戦略の専門家です。"));
    assert!(system.content.contains("具体的かつ実践的なアドバイスを提供してください。"));
    assert!(system.content.contains("他の専門家に相談するように促してください。"));
    assert!(system.content.contains("回答は簡潔に、わかりやすく説明してください。"));

    let user = &conv.entries()[1];
    assert_eq!(user.role, EntryRole::User);
    assert_eq!(user.content, "来月の予算配分について相談したい");
}

#[test]
fn assembled_pair_is_deterministic() {
    let prompt = RolePrompt::built_in();
    let mut a = Conversation::new();
    let mut b = Conversation::new();
    submit(&mut a, &prompt, SpecialistRole::Scheduling, "納期リスクを評価して");
    submit(&mut b, &prompt, SpecialistRole::Scheduling, "納期リスクを評価して");
    assert_eq!(a.entries(), b.entries());
}

#[test]
fn repeated_submissions_grow_history_by_two() {
    let prompt = RolePrompt::built_in();
    let mut conv = Conversation::new();
    for i in 1..=5 {
        submit(&mut conv, &prompt, SpecialistRole::Marketing, "キャンペーン案を出して");
        assert_eq!(conv.len(), i * 2);
    }
}

#[test]
fn mixed_roles_accumulate_in_one_history() {
    // Each turn re-sends a fresh role instruction; switching personas within
    // one session simply appends another system+user pair.
    let prompt = RolePrompt::built_in();
    let mut conv = Conversation::new();
    submit(&mut conv, &prompt, SpecialistRole::BusinessStrategy, "プロセス改善の相談");
    conv.record_reply("改善案です");
    submit(&mut conv, &prompt, SpecialistRole::Hr, "採用計画の相談");

    assert_eq!(conv.len(), 5);
    assert!(conv.entries()[0].content.contains(SpecialistRole::BusinessStrategy.label()));
    assert!(conv.entries()[3].content.contains(SpecialistRole::Hr.label()));
}

#[test]
fn empty_request_message_is_exact() {
    // The channel boundary prints this string verbatim; pin it.
    assert_eq!(EMPTY_REQUEST_MESSAGE, "リクエストが入力されていません。");
}
