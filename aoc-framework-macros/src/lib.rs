//! Procedural macros for the `aoc-framework` crate.

use proc_macro::TokenStream;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::parse::Parse;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// Properties given to `#[solution_runner(...)]`.
#[derive(Default)]
struct RunnerProperties {
    /// The expression to use as a solution name; should resolve to string slice
    name: Option<Expr>,
    /// The type to use for a `ParseData` generic parameter
    parsed: Option<Type>,
    /// The type to use for a `Solution<PartOne>` generic parameter
    part_one: Option<Type>,
    /// The type to use for a `Solution<PartTwo>` generic parameter
    part_two: Option<Type>,
    /// The expression to use as the solution's example; should resolve to `Example`
    example: Option<Expr>,
}

/// Parse a property's value into the slot, erroring if the property was already given.
fn set_once<T: Parse>(slot: &mut Option<T>, meta: &ParseNestedMeta, key: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate '{key}' property")));
    }
    *slot = Some(meta.value()?.parse()?);
    Ok(())
}

fn missing_property(key: &str) -> TokenStream {
    Error::new(
        proc_macro2::Span::call_site(),
        format!("missing required property: '{key}'"),
    )
    .to_compile_error()
    .into()
}

/// Procedural macro attribute that generates a `SolutionRunner` implementation.
///
/// Routes to the runner's solve function matching which solution types are provided.
///
/// # Properties
///
/// - `name` (required): An expression that evaluates to `&str`, the solution's display name.
/// - `part_one` (required): The type implementing `Solution<PartOne>`.
/// - `part_two` (optional): The type implementing `Solution<PartTwo>`. If omitted, only part one
///   is solved.
/// - `parsed` (optional): A type implementing `ParseData`, used to parse input before solving. If
///   omitted, the input string is passed directly to solvers.
/// - `example` (optional): An expression that evaluates to `aoc_framework::Example`, returned from
///   `SolutionRunner::example` so the solution can be checked against it.
///
/// # Errors
///
/// Returns a compile error if:
/// - Applied to anything other than a struct or impl block
/// - Required properties (`name`, `part_one`) are missing
/// - Any property is specified more than once
/// - An unsupported property is provided
///
/// # Examples
///
/// ```ignore
/// #[solution_runner(name = "Day 1", part_one = Day01)]
/// struct Day01Runner;
/// ```
///
/// With a parse step and an example, on an impl block:
///
/// ```ignore
/// const EXAMPLE: Example = Example::new(EXAMPLE_INPUT, "18");
///
/// #[solution_runner(name = "Day 4", parsed = WordSearch, part_one = Day04, example = EXAMPLE)]
/// impl AdventOfCode2024<4> {}
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut properties = RunnerProperties::default();

    let solution_runner_parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("name") {
            set_once(&mut properties.name, &meta, "name")
        } else if meta.path.is_ident("parsed") {
            set_once(&mut properties.parsed, &meta, "parsed")
        } else if meta.path.is_ident("part_one") {
            set_once(&mut properties.part_one, &meta, "part_one")
        } else if meta.path.is_ident("part_two") {
            set_once(&mut properties.part_two, &meta, "part_two")
        } else if meta.path.is_ident("example") {
            set_once(&mut properties.example, &meta, "example")
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    });
    parse_macro_input!(args with solution_runner_parser);

    let RunnerProperties {
        name,
        parsed,
        part_one,
        part_two,
        example,
    } = properties;

    let Some(name_expr) = name else {
        return missing_property("name");
    };
    let Some(part_one_ty) = part_one else {
        return missing_property("part_one");
    };

    let solve_function_call = match (parsed, part_two) {
        (None, None) => {
            quote! {
                aoc_framework::runner::solve_half_solution::<#part_one_ty>(
                    #name_expr,
                    input,
                    handler,
                    timed
                )
            }
        }
        (None, Some(part_two_ty)) => {
            quote! {
                aoc_framework::runner::solve_full_solution::<#part_one_ty, #part_two_ty>(
                    #name_expr,
                    input,
                    handler,
                    timed
                )
            }
        }
        (Some(parsed_ty), None) => {
            quote! {
                aoc_framework::runner::solve_parsed_half_solution::<#parsed_ty, #part_one_ty>(
                    #name_expr,
                    input,
                    handler,
                    timed
                )
            }
        }
        (Some(parsed_ty), Some(part_two_ty)) => {
            quote! {
                aoc_framework::runner::solve_parsed_full_solution::<
                    #parsed_ty,
                    #part_one_ty,
                    #part_two_ty
                >(#name_expr, input, handler, timed)
            }
        }
    };

    // left out when absent so the trait's default of `None` applies
    let example_function = example.map(|example_expr| {
        quote! {
            fn example() -> ::core::option::Option<aoc_framework::Example> {
                ::core::option::Option::Some(#example_expr)
            }
        }
    });

    let original_input = input.clone(); // clone before macro consumes input
    let item = parse_macro_input!(input as Item);

    let runner_ty = match item {
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return Error::new(
                proc_macro2::Span::call_site(),
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    let input_ts = proc_macro2::TokenStream::from(original_input);
    TokenStream::from(quote! {
        #input_ts

        impl aoc_framework::runner::SolutionRunner for #runner_ty {
            fn run(
                input: &str,
                handler: &mut dyn aoc_framework::runner::OutputHandler,
                timed: bool
            ) -> aoc_framework::DynamicResult<()> {
                #solve_function_call
            }

            #example_function
        }
    })
}
