/// Server-rendered HTML pages
///
/// Every response in this app is a full-page render or a redirect; there is
/// no JSON surface. Pages are assembled from plain Rust strings around a
/// shared layout. All user-supplied text goes through [`escape`] on the way
/// into the markup.
use chrono::NaiveDate;
use taskboard_shared::models::task::Task;

/// Escapes text for safe interpolation into HTML
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 42rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
h1 { font-size: 1.4rem; }
.flash { background: #fff3cd; border: 1px solid #e0c97f; padding: 0.5rem 0.75rem; border-radius: 4px; margin-bottom: 1rem; }
.task { border-bottom: 1px solid #ddd; padding: 0.5rem 0; }
.task.completed .title { text-decoration: line-through; color: #888; }
.task.overdue .due { color: #b00020; font-weight: bold; }
.task .due { color: #555; font-size: 0.9rem; }
.task .description { color: #444; margin: 0.2rem 0; }
.actions a { margin-right: 0.75rem; font-size: 0.9rem; }
form.add label { display: block; margin-top: 0.5rem; }
form.add input, form.add textarea { width: 100%; box-sizing: border-box; }
form.auth label { display: block; margin-top: 0.5rem; }
form.auth input { width: 100%; box-sizing: border-box; }
button { margin-top: 0.75rem; }
nav { margin-bottom: 1.5rem; }
nav .who { color: #555; }
"#;

fn layout(title: &str, nav: &str, flash: Option<&str>, body: &str) -> String {
    let flash_html = match flash {
        Some(message) => format!(r#"<div class="flash">{}</div>"#, escape(message)),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Taskboard</title>
<style>{style}</style>
</head>
<body>
<nav>{nav}</nav>
{flash}
{body}
</body>
</html>
"#,
        title = escape(title),
        style = STYLE,
        nav = nav,
        flash = flash_html,
        body = body,
    )
}

fn task_html(task: &Task, today: NaiveDate) -> String {
    let mut classes = String::from("task");
    if task.completed {
        classes.push_str(" completed");
    }
    if task.is_overdue(today) {
        classes.push_str(" overdue");
    }

    let toggle_label = if task.completed {
        "Mark open"
    } else {
        "Mark done"
    };

    format!(
        r#"<div class="{classes}">
<span class="title">{title}</span> <span class="due">(due {due})</span>
<p class="description">{description}</p>
<span class="actions"><a href="/update/{id}">{toggle_label}</a><a href="/delete/{id}">Delete</a></span>
</div>"#,
        classes = classes,
        title = escape(&task.title),
        due = task.due_date.format("%Y-%m-%d"),
        description = escape(&task.description),
        id = task.id,
        toggle_label = toggle_label,
    )
}

/// The task list page: add form plus the user's tasks, oldest first
pub fn task_list_page(
    user_name: &str,
    tasks: &[Task],
    today: NaiveDate,
    flash: Option<&str>,
) -> String {
    let nav = format!(
        r#"<span class="who">Signed in as {}</span> &middot; <a href="/logout">Log out</a>"#,
        escape(user_name)
    );

    let items = if tasks.is_empty() {
        "<p>No tasks yet. Add one below.</p>".to_string()
    } else {
        tasks
            .iter()
            .map(|t| task_html(t, today))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = format!(
        r#"<h1>Your tasks</h1>
{items}
<h1>Add a task</h1>
<form class="add" method="post" action="/add">
<label>Title <input name="title" required></label>
<label>Description <textarea name="description" rows="2"></textarea></label>
<label>Due date <input name="due_date" type="date" required></label>
<button type="submit">Add task</button>
</form>"#,
        items = items,
    );

    layout("Tasks", &nav, flash, &body)
}

/// The login form
pub fn login_page(flash: Option<&str>) -> String {
    let nav = r#"<a href="/signup">Sign up</a>"#;
    let body = r#"<h1>Log in</h1>
<form class="auth" method="post" action="/login">
<label>Email <input name="email" type="email" required></label>
<label>Password <input name="password" type="password" required></label>
<button type="submit">Log in</button>
</form>"#;

    layout("Log in", nav, flash, body)
}

/// The signup form
pub fn signup_page(flash: Option<&str>) -> String {
    let nav = r#"<a href="/login">Log in</a>"#;
    let body = r#"<h1>Sign up</h1>
<form class="auth" method="post" action="/signup">
<label>Email <input name="email" type="email" required></label>
<label>User name <input name="user_name" required></label>
<label>Password <input name="password1" type="password" required></label>
<label>Confirm password <input name="password2" type="password" required></label>
<button type="submit">Sign up</button>
</form>"#;

    layout("Sign up", nav, flash, body)
}

/// A bare error page for non-recoverable failures
pub fn error_page(title: &str, message: &str) -> String {
    let body = format!(
        r#"<h1>{}</h1>
<p>{}</p>
<p><a href="/">Back to your tasks</a></p>"#,
        escape(title),
        escape(message)
    );

    layout(title, "", None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task(title: &str, completed: bool, due: NaiveDate) -> Task {
        Task {
            id: 1,
            title: title.to_string(),
            description: "desc".to_string(),
            due_date: due,
            completed,
            user_id: Some(1),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_task_list_escapes_user_content() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let task = sample_task("<script>alert(1)</script>", false, today);

        let html = task_list_page("bob", &[task], today, None);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_overdue_task_is_flagged() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let overdue = sample_task("late", false, today.pred_opt().unwrap());

        let html = task_list_page("bob", &[overdue], today, None);
        assert!(html.contains("task overdue"));
    }

    #[test]
    fn test_completed_task_is_marked() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let done = sample_task("done", true, today);

        let html = task_list_page("bob", &[done], today, None);
        assert!(html.contains("task completed"));
        assert!(html.contains("Mark open"));
    }

    #[test]
    fn test_flash_is_rendered_and_escaped() {
        let html = login_page(Some("<oops>"));
        assert!(html.contains(r#"<div class="flash">&lt;oops&gt;</div>"#));
    }

    #[test]
    fn test_empty_list_shows_hint() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let html = task_list_page("bob", &[], today, None);
        assert!(html.contains("No tasks yet"));
    }
}
