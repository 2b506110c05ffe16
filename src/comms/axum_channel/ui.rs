//! UI route handler for the axum channel.
//!
//! The whole user surface is one embedded page: a free-text request input,
//! a radio selector over the five personas (populated from `/api/roles`),
//! and a submit button that posts to `/api/answer`. Empty input is caught in
//! the page script - the API is not called - mirroring the server-side check.

use axum::response::Html;

const ROOT_INDEX_HTML: &str = r#"<!doctype html>
<html lang="ja">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>専門家AIアシスタント</title>
  <style>
    *, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
    body {
      font-family: system-ui, -apple-system, sans-serif;
      background: #0f0f0f; color: #e0e0e0;
      display: flex; justify-content: center;
      min-height: 100vh; padding: 3rem 1rem;
    }
    .card {
      width: 100%; max-width: 640px; padding: 2rem;
      border: 1px solid #333; border-radius: 12px;
      background: #1a1a1a; height: fit-content;
    }
    h1 { font-size: 1.4rem; margin-bottom: 1.5rem; }
    label { display: block; font-size: 0.9rem; color: #aaa; margin-bottom: 0.5rem; }
    input[type="text"] {
      width: 100%; padding: 0.6rem 0.8rem; margin-bottom: 1.25rem;
      border: 1px solid #444; border-radius: 8px;
      background: #111; color: #e0e0e0; font-size: 1rem;
    }
    fieldset { border: none; margin-bottom: 1.25rem; }
    .role { display: flex; gap: 0.5rem; align-items: center; padding: 0.25rem 0; }
    button {
      padding: 0.5rem 1.5rem; border: none;
      border-radius: 8px; background: #2a2a3a; color: #c0c0e0;
      font-size: 0.95rem; cursor: pointer;
      transition: background 0.15s;
    }
    button:hover { background: #3a3a5a; }
    button:disabled { opacity: 0.5; cursor: wait; }
    hr { border: none; border-top: 1px solid #333; margin: 1.5rem 0; }
    #answer-header { font-weight: bold; margin-bottom: 0.5rem; display: none; }
    #answer { white-space: pre-wrap; line-height: 1.6; }
    #answer.error { color: #e08080; }
  </style>
</head>
<body>
  <div class="card">
    <h1>専門家AIアシスタント</h1>

    <label for="request">リクエストを入力してください。</label>
    <input type="text" id="request" autocomplete="off" />

    <fieldset id="roles">
      <label>LLMに振る舞わせる専門家の種類を選択してください。</label>
    </fieldset>

    <button id="submit">実行</button>

    <hr />
    <div id="answer-header">回答:</div>
    <div id="answer"></div>
  </div>

  <script>
    let sessionId = null;

    async function loadRoles() {
      const res = await fetch('/api/roles');
      const data = await res.json();
      const fieldset = document.getElementById('roles');
      data.roles.forEach((role, i) => {
        const row = document.createElement('div');
        row.className = 'role';
        const input = document.createElement('input');
        input.type = 'radio';
        input.name = 'role';
        input.id = 'role-' + role.id;
        input.value = role.id;
        if (i === 0) input.checked = true;
        const label = document.createElement('label');
        label.htmlFor = input.id;
        label.textContent = role.label;
        row.append(input, label);
        fieldset.append(row);
      });
    }

    function show(text, isError) {
      const header = document.getElementById('answer-header');
      const answer = document.getElementById('answer');
      header.style.display = isError === 'plain' ? 'none' : 'block';
      answer.className = isError === true ? 'error' : '';
      answer.textContent = text;
    }

    async function submit() {
      const request = document.getElementById('request').value;
      // Empty input never reaches the API.
      if (request.trim() === '') {
        show('リクエストが入力されていません。', 'plain');
        return;
      }
      const role = document.querySelector('input[name="role"]:checked').value;
      const button = document.getElementById('submit');
      button.disabled = true;
      show('…', 'plain');
      try {
        const res = await fetch('/api/answer', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ role, request, session_id: sessionId }),
        });
        const data = await res.json();
        if (!res.ok) {
          show(data.message || 'エラーが発生しました。', true);
        } else {
          sessionId = data.session_id;
          show(data.reply, false);
        }
      } catch (e) {
        show('エラーが発生しました: ' + e, true);
      } finally {
        button.disabled = false;
      }
    }

    document.getElementById('submit').addEventListener('click', submit);
    document.getElementById('request').addEventListener('keydown', (e) => {
      if (e.key === 'Enter') submit();
    });
    loadRoles();
  </script>
</body>
</html>
"#;

/// GET / - the single-page form.
pub(super) async fn root() -> Html<&'static str> {
    Html(ROOT_INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_has_form_elements() {
        assert!(ROOT_INDEX_HTML.contains("専門家AIアシスタント"));
        assert!(ROOT_INDEX_HTML.contains("リクエストを入力してください。"));
        assert!(ROOT_INDEX_HTML.contains("実行"));
        assert!(ROOT_INDEX_HTML.contains("/api/answer"));
        assert!(ROOT_INDEX_HTML.contains("/api/roles"));
    }

    #[test]
    fn page_shows_static_message_for_empty_input() {
        assert!(ROOT_INDEX_HTML.contains("リクエストが入力されていません。"));
    }
}
