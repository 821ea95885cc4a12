use std::collections::HashSet;

use super::{
    ArgSpec, BodyLine, ClassSpec, ConstructorSpec, DocPart, FieldSpec, MethodSpec, VisibilitySpec,
};
use crate::{Error, Result, manifest::ParseContext};

impl ClassSpec {
    /// Validate the class and everything it declares.
    ///
    /// Member links are resolved separately, once every class is known.
    pub(crate) fn validate(&self, ctx: &ParseContext) -> Result<()> {
        ctx.validate_qualified_name(&self.name, "class")?;

        if self.is_final && self.is_abstract {
            return Err(ctx
                .source_context()
                .validation_error(format!("class '{}' cannot be both final and abstract", self.name)));
        }

        let ctx = ctx.push(self.simple_name());

        if let Some(superclass) = &self.extends {
            if self.interface {
                return Err(ctx.source_context().validation_error(format!(
                    "interface '{}' cannot extend a class, list super-interfaces in 'implements'",
                    self.name
                )));
            }
            ctx.validate_type(superclass, "superclass")?;
        }
        for interface in &self.implements {
            ctx.validate_type(interface, "interface")?;
        }
        for annotation in &self.annotations {
            ctx.validate_qualified_name(annotation, "annotation")?;
        }
        validate_doc(&ctx, &self.doc)?;

        let mut field_names = HashSet::new();
        for field in &self.fields {
            field.validate(&ctx, self.interface)?;
            if !field_names.insert(field.name.as_str()) {
                return Err(ctx.source_context().validation_error(format!(
                    "field '{}' is declared more than once in '{}'",
                    field.name, self.name
                )));
            }
        }

        if self.interface && !self.constructors.is_empty() {
            return Err(ctx.source_context().validation_error(format!(
                "interface '{}' cannot declare constructors",
                self.name
            )));
        }
        for constructor in &self.constructors {
            constructor.validate(&ctx.push("<init>"))?;
        }

        for method in &self.methods {
            method.validate(&ctx, self.interface)?;
        }

        Ok(())
    }
}

impl FieldSpec {
    fn validate(&self, ctx: &ParseContext, in_interface: bool) -> Result<()> {
        ctx.validate_name(&self.name, "field")?;
        let ctx = ctx.push(&self.name);

        if in_interface {
            if let Some(visibility @ (VisibilitySpec::Private | VisibilitySpec::Protected)) =
                self.visibility
            {
                return Err(ctx.source_context().validation_error(format!(
                    "interface field '{}' cannot be {}",
                    ctx.path_string(),
                    visibility.keyword()
                )));
            }
            if self.init.is_none() {
                return Err(ctx.source_context().validation_error(format!(
                    "interface field '{}' needs an initializer",
                    ctx.path_string()
                )));
            }
        }

        ctx.validate_type(&self.ty, "field")?;
        if let Some(init) = &self.init {
            for ty in init.types() {
                ctx.validate_type(ty, "initializer")?;
            }
        }
        validate_doc(&ctx, &self.doc)
    }
}

impl MethodSpec {
    fn validate(&self, ctx: &ParseContext, in_interface: bool) -> Result<()> {
        ctx.validate_name(&self.name, "method")?;
        let ctx = ctx.push(&self.name);

        if let Some(returns) = &self.returns {
            ctx.validate_type(returns, "return type")?;
        }
        if self.is_abstract && !self.body.is_empty() {
            return Err(ctx.source_context().validation_error(format!(
                "abstract method '{}' cannot have a body",
                ctx.path_string()
            )));
        }
        if self.is_abstract && (self.is_final || self.is_static) {
            return Err(ctx.source_context().validation_error(format!(
                "abstract method '{}' cannot be {}",
                ctx.path_string(),
                if self.is_final { "final" } else { "static" }
            )));
        }
        if in_interface {
            self.validate_in_interface(&ctx)?;
        }

        validate_signature(&ctx, &self.args, &self.throws, &self.annotations)?;
        validate_doc(&ctx, &self.doc)?;
        validate_body(&ctx, &self.body)
    }
}

impl MethodSpec {
    fn validate_in_interface(&self, ctx: &ParseContext) -> Result<()> {
        let problem = if self.is_final {
            Some("cannot be final")
        } else if self.visibility == Some(VisibilitySpec::Protected) {
            Some("cannot be protected")
        } else if self.visibility == Some(VisibilitySpec::Private) && self.body.is_empty() {
            Some("is private and needs a body")
        } else {
            None
        };
        match problem {
            Some(problem) => Err(ctx.source_context().validation_error(format!(
                "interface method '{}' {}",
                ctx.path_string(),
                problem
            ))),
            None => Ok(()),
        }
    }
}

impl ConstructorSpec {
    fn validate(&self, ctx: &ParseContext) -> Result<()> {
        validate_signature(ctx, &self.args, &self.throws, &self.annotations)?;
        validate_doc(ctx, &self.doc)?;
        validate_body(ctx, &self.body)
    }
}

fn validate_signature(
    ctx: &ParseContext,
    args: &[ArgSpec],
    throws: &[crate::TypeSpec],
    annotations: &[String],
) -> Result<()> {
    let mut names = HashSet::new();
    for (i, arg) in args.iter().enumerate() {
        let name = match &arg.name {
            Some(name) => {
                ctx.validate_name(name, "argument")?;
                name.clone()
            }
            None => format!("arg{}", i),
        };
        ctx.validate_type(&arg.ty, "argument")?;

        if !names.insert(name.clone()) {
            let span = ctx.find_span(&name);
            let method = format!("'{}'", ctx.path_string());
            return Err(ctx.source_context().report(|src| Error::DuplicateArgument {
                src,
                span,
                name,
                method,
            }));
        }
    }

    for exception in throws {
        ctx.validate_type(exception, "thrown type")?;
    }
    for annotation in annotations {
        ctx.validate_qualified_name(annotation, "annotation")?;
    }
    Ok(())
}

fn validate_doc(ctx: &ParseContext, doc: &[DocPart]) -> Result<()> {
    for part in doc {
        if let DocPart::Link { link } = part {
            ctx.validate_type(link, "doc link")?;
        }
    }
    Ok(())
}

fn validate_body(ctx: &ParseContext, body: &[BodyLine]) -> Result<()> {
    let mut result = Ok(());
    for line in body {
        line.for_each_type(&mut |ty| {
            if result.is_ok() {
                result = ctx.validate_type(ty, "body type");
            }
        });
    }
    result
}
