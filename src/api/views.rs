//! HTML rendering for the dashboard pages.
//!
//! The corpus carries no template engine, so pages are built with small
//! render functions over plain strings and served through
//! [`axum::response::Html`]. All user-supplied text is escaped.

use crate::calculation::{SalaryComponents, format_inr};
use crate::models::{Employee, EnrichedEmployee, PayrollStats};

use super::request::EmployeeForm;

/// Blanket validation message shown by the add and edit forms.
pub(crate) const VALIDATION_MESSAGE: &str =
    "All fields are required and salary must be a valid positive number.";

/// Escapes text for safe interpolation into HTML.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Wraps page content in the shared document shell.
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{} - Payroll Dashboard</title>
<style>
  body {{ font-family: system-ui, sans-serif; margin: 0; background: #f4f6f8; color: #1f2933; }}
  header {{ background: #1f4e79; color: #fff; padding: 16px 24px; }}
  header a {{ color: #cfe2f3; margin-right: 16px; text-decoration: none; }}
  main {{ max-width: 960px; margin: 24px auto; padding: 0 16px; }}
  .cards {{ display: flex; gap: 16px; margin-bottom: 24px; }}
  .card {{ background: #fff; border-radius: 8px; padding: 16px 24px; flex: 1; box-shadow: 0 1px 3px rgba(0,0,0,.1); }}
  .card h3 {{ margin: 0 0 8px; font-size: 13px; text-transform: uppercase; color: #616e7c; }}
  .card p {{ margin: 0; font-size: 22px; font-weight: 600; }}
  table {{ width: 100%; border-collapse: collapse; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.1); }}
  th, td {{ padding: 10px 12px; text-align: left; border-bottom: 1px solid #e4e7eb; }}
  th {{ background: #eef2f6; font-size: 13px; text-transform: uppercase; }}
  .flash {{ background: #e3f9e5; border: 1px solid #57ae5b; padding: 10px 14px; border-radius: 6px; margin-bottom: 16px; }}
  .error {{ background: #fde3e3; border: 1px solid #d64545; padding: 10px 14px; border-radius: 6px; margin-bottom: 16px; }}
  form.entry label {{ display: block; margin: 12px 0 4px; }}
  form.entry input {{ width: 100%; max-width: 320px; padding: 8px; border: 1px solid #cbd2d9; border-radius: 4px; }}
  button, .btn {{ display: inline-block; margin-top: 16px; padding: 8px 18px; background: #1f4e79; color: #fff; border: 0; border-radius: 4px; text-decoration: none; cursor: pointer; }}
  .slip {{ background: #fff; padding: 24px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,.1); max-width: 480px; }}
  .slip table {{ box-shadow: none; }}
</style>
</head>
<body>
<header>
  <strong>Payroll Dashboard</strong>
  <nav style="display:inline; margin-left:24px;">
    <a href="/">Dashboard</a>
    <a href="/add">Add Employee</a>
  </nav>
</header>
<main>
{}
</main>
</body>
</html>
"#,
        escape_html(title),
        body
    )
}

/// Renders the dashboard: stats cards, search box, and the employee table.
pub(crate) fn dashboard_page(
    employees: &[EnrichedEmployee],
    stats: &PayrollStats,
    search_query: &str,
    success: Option<&str>,
    error: Option<&str>,
) -> String {
    let mut body = String::new();

    if let Some(message) = success {
        body.push_str(&format!(
            "<div class=\"flash\">{}</div>\n",
            escape_html(message)
        ));
    }
    if let Some(message) = error {
        body.push_str(&format!(
            "<div class=\"error\">{}</div>\n",
            escape_html(message)
        ));
    }

    body.push_str(&format!(
        r#"<div class="cards">
  <div class="card"><h3>Total Employees</h3><p>{}</p></div>
  <div class="card"><h3>Total Net Payroll</h3><p>{}</p></div>
  <div class="card"><h3>Highest Basic Salary</h3><p>{}</p></div>
</div>
"#,
        stats.total_employees,
        escape_html(&stats.total_payroll),
        escape_html(&stats.highest_salary),
    ));

    body.push_str(&format!(
        r#"<form action="/search" method="get" style="margin-bottom:16px;">
  <input type="text" name="q" value="{}" placeholder="Search by id, name or department">
  <button type="submit">Search</button>
</form>
"#,
        escape_html(search_query)
    ));

    if employees.is_empty() {
        body.push_str("<p>No employees found.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>ID</th><th>Name</th><th>Department</th><th>Basic</th>\
             <th>HRA</th><th>DA</th><th>PF</th><th>Net Pay</th><th>Actions</th></tr>\n",
        );
        for e in employees {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td>{}</td><td>{}</td><td>{}</td>\
                 <td><a href=\"/slip/{}\">Slip</a> <a href=\"/edit/{}\">Edit</a> \
                 <a href=\"/delete/{}\">Delete</a></td></tr>\n",
                e.id,
                escape_html(&e.name),
                escape_html(&e.department),
                escape_html(&e.basic_fmt),
                escape_html(&e.hra_fmt),
                escape_html(&e.da_fmt),
                escape_html(&e.pf_fmt),
                escape_html(&e.net_fmt),
                e.id,
                e.id,
                e.id,
            ));
        }
        body.push_str("</table>\n");
    }

    layout("Dashboard", &body)
}

/// Renders the employee entry form shared by the add and edit pages.
fn entry_form(action: &str, submit_label: &str, form: Option<&EmployeeForm>, error: Option<&str>) -> String {
    let empty = EmployeeForm::default();
    let form = form.unwrap_or(&empty);

    let mut body = String::new();
    if let Some(message) = error {
        body.push_str(&format!(
            "<div class=\"error\">{}</div>\n",
            escape_html(message)
        ));
    }

    body.push_str(&format!(
        r#"<form class="entry" action="{}" method="post">
  <label for="name">Name</label>
  <input type="text" id="name" name="name" value="{}">
  <label for="department">Department</label>
  <input type="text" id="department" name="department" value="{}">
  <label for="basicSalary">Basic Salary</label>
  <input type="text" id="basicSalary" name="basicSalary" value="{}">
  <button type="submit">{}</button>
</form>
"#,
        escape_html(action),
        escape_html(&form.name),
        escape_html(&form.department),
        escape_html(&form.basic_salary),
        escape_html(submit_label),
    ));
    body
}

/// Renders the add-employee page.
pub(crate) fn add_page(error: Option<&str>, form: Option<&EmployeeForm>) -> String {
    let body = format!(
        "<h2>Add Employee</h2>\n{}",
        entry_form("/add", "Add Employee", form, error)
    );
    layout("Add Employee", &body)
}

/// Renders the edit-employee page.
pub(crate) fn edit_page(id: u64, form: &EmployeeForm, error: Option<&str>) -> String {
    let body = format!(
        "<h2>Edit Employee #{}</h2>\n{}",
        id,
        entry_form(&format!("/edit/{}", id), "Save Changes", Some(form), error)
    );
    layout("Edit Employee", &body)
}

/// Renders the payslip page for one employee.
pub(crate) fn slip_page(
    employee: &Employee,
    components: &SalaryComponents,
    month_year: &str,
    generated_on: &str,
) -> String {
    let body = format!(
        r#"<div class="slip">
<h2>Salary Slip - {}</h2>
<p>{} ({}) - Employee #{}</p>
<table>
<tr><th>Component</th><th>Amount</th></tr>
<tr><td>Basic Salary</td><td>{}</td></tr>
<tr><td>House Rent Allowance</td><td>{}</td></tr>
<tr><td>Dearness Allowance</td><td>{}</td></tr>
<tr><td>Provident Fund (deduction)</td><td>{}</td></tr>
<tr><td><strong>Net Pay</strong></td><td><strong>{}</strong></td></tr>
</table>
<p style="color:#616e7c;">Generated on {}</p>
<a class="btn" href="/">Back to Dashboard</a>
</div>
"#,
        escape_html(month_year),
        escape_html(&employee.name),
        escape_html(&employee.department),
        employee.id,
        escape_html(&format_inr(employee.basic_salary)),
        escape_html(&format_inr(components.hra)),
        escape_html(&format_inr(components.da)),
        escape_html(&format_inr(components.pf)),
        escape_html(&format_inr(components.net)),
        escape_html(generated_on),
    );
    layout("Salary Slip", &body)
}
