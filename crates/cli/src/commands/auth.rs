// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clubsync::SignupForm;
use clubsync_core::Role;

use crate::cli::OutputFormat;
use crate::context::Context;
use crate::display::{format_one, Line};
use crate::error::Result;

pub async fn login(ctx: &Context, email: &str, password: &str) -> Result<()> {
    let user = ctx.auth().login(email, password).await?;
    match ctx.format {
        OutputFormat::Json => println!("{}", format_one(&user, ctx.format)?),
        OutputFormat::Text => println!("Signed in as {}", user.line()),
    }
    Ok(())
}

pub async fn signup(
    ctx: &Context,
    name: String,
    email: String,
    password: String,
    role: Role,
    department: Option<String>,
) -> Result<()> {
    let form = SignupForm {
        name,
        email,
        password,
        role,
        department,
    };
    let user = ctx.auth().signup(&form).await?;
    match ctx.format {
        OutputFormat::Json => println!("{}", format_one(&user, ctx.format)?),
        OutputFormat::Text => println!("Created account {}", user.line()),
    }
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<()> {
    let was_signed_in = ctx.session().is_signed_in();
    ctx.session().logout()?;
    if ctx.format == OutputFormat::Text {
        if was_signed_in {
            println!("Signed out");
        } else {
            println!("Not signed in");
        }
    }
    Ok(())
}

pub fn whoami(ctx: &Context) -> Result<()> {
    println!("{}", render_whoami(ctx)?);
    Ok(())
}

pub(crate) fn render_whoami(ctx: &Context) -> Result<String> {
    match (ctx.session().user(), ctx.format) {
        (Some(user), format) => format_one(&user, format),
        (None, OutputFormat::Json) => Ok("null".to_string()),
        (None, OutputFormat::Text) => Ok("Not signed in".to_string()),
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
