//! Standalone login page.

use super::flash::render_optional_flash;
use super::html_escape;
use super::script::render_script_tag;
use crate::config::BrandingConfig;
use crate::types::FlashMessage;

pub const LOGIN_ACTION: &str = "/login";
pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    pub session_expired: bool,
    pub flash: Option<FlashMessage>,
    /// Year shown in the footer.
    pub year: i32,
}

impl LoginView {
    /// View stamped with the current year.
    pub fn now(session_expired: bool, flash: Option<FlashMessage>) -> Self {
        Self {
            session_expired,
            flash,
            year: super::current_year(),
        }
    }
}

fn render_expired_banner() -> &'static str {
    r#"<div class="relative bg-yellow-50 border-r-4 border-yellow-400 p-4 mb-6 rounded" role="alert" data-session-expired data-dismissable><div class="flex items-start"><i class="fas fa-exclamation-triangle text-yellow-400 ml-3 mt-1"></i><div class="flex-1"><p class="text-sm font-bold text-yellow-800">انتهت صلاحية الجلسة</p><p class="text-sm text-yellow-700">تم تسجيل خروجك تلقائيًا بسبب عدم النشاط. يرجى تسجيل الدخول مرة أخرى.</p></div><button type="button" class="text-yellow-500 hover:text-yellow-700" aria-label="إغلاق" data-dismiss><i class="fas fa-times"></i></button></div></div>"#
}

fn render_form() -> String {
    format!(
        r#"<form method="POST" action="{action}" class="space-y-6">
<div><label for="login-email" class="block text-sm font-medium text-gray-700">البريد الإلكتروني</label><div class="mt-1"><input id="login-email" name="email" type="email" autocomplete="email" required class="appearance-none block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm"></div></div>
<div><label for="login-password" class="block text-sm font-medium text-gray-700">كلمة المرور</label><div class="mt-1 relative" data-password-field><input id="login-password" name="password" type="password" autocomplete="current-password" required class="appearance-none block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-indigo-500 focus:border-indigo-500 sm:text-sm" data-password-input><button type="button" class="absolute inset-y-0 left-0 pl-3 flex items-center text-gray-400 hover:text-gray-600" aria-label="إظهار كلمة المرور" aria-pressed="false" data-password-toggle><i class="fas fa-eye" data-password-icon></i></button></div></div>
<div class="flex items-center justify-between"><div class="flex items-center"><input id="login-remember" name="remember" type="checkbox" class="h-4 w-4 text-indigo-600 focus:ring-indigo-500 border-gray-300 rounded"><label for="login-remember" class="mr-2 block text-sm text-gray-900">تذكرني</label></div><div class="text-sm"><a href="{forgot}" class="font-medium text-indigo-600 hover:text-indigo-500">نسيت كلمة المرور؟</a></div></div>
<div><button type="submit" class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-indigo-600 hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500">تسجيل الدخول</button></div>
</form>"#,
        action = LOGIN_ACTION,
        forgot = FORGOT_PASSWORD_PATH,
    )
}

/// Render the full login document.
pub fn render_login(view: &LoginView, branding: &BrandingConfig) -> String {
    let banner = if view.session_expired {
        render_expired_banner()
    } else {
        ""
    };
    let flash = render_optional_flash(view.flash.as_ref());
    let app_name = html_escape(&branding.app_name);

    format!(
        r#"<!DOCTYPE html>
<html lang="ar" dir="rtl">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>تسجيل الدخول - {app_name}</title>
<link rel="stylesheet" href="{stylesheet}">
<link rel="stylesheet" href="{icon_font}">
</head>
<body class="bg-gray-50">
<div class="min-h-screen flex flex-col justify-center py-12 sm:px-6 lg:px-8" data-component="login">
<div class="sm:mx-auto sm:w-full sm:max-w-md"><img class="mx-auto h-16 w-auto" src="{logo}" alt="{app_name}"><h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">تسجيل الدخول إلى لوحة التحكم</h2></div>
<div class="mt-8 sm:mx-auto sm:w-full sm:max-w-md"><div class="bg-white py-8 px-4 shadow sm:rounded-lg sm:px-10">
{banner}{flash}{form}
</div></div>
<footer class="mt-8 text-center text-sm text-gray-500" data-footer>&copy; {year} {copyright}</footer>
</div>
{script}
</body>
</html>"#,
        stylesheet = html_escape(&branding.stylesheet_url),
        icon_font = html_escape(&branding.icon_font_url),
        logo = html_escape(&branding.logo_url),
        form = render_form(),
        year = view.year,
        copyright = html_escape(&branding.copyright),
        script = render_script_tag(),
    )
}
