use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Implements `fundhub_std::interfaces::OwnableInterface` for a contract type.
///
/// The owner still has to be set in the constructor with `fundhub_std::interfaces::set_owner`.
#[proc_macro_attribute]
pub fn ownable(_attr: TokenStream, input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    TokenStream::from(ownable_impl(&input))
}

fn ownable_impl(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;

    quote! {
        #input

        #[soroban_sdk::contractimpl]
        impl fundhub_std::interfaces::OwnableInterface for #name {
            fn owner(env: &soroban_sdk::Env) -> soroban_sdk::Address {
                fundhub_std::interfaces::owner(env)
            }

            fn transfer_ownership(env: &soroban_sdk::Env, new_owner: soroban_sdk::Address) {
                fundhub_std::interfaces::transfer_ownership::<Self>(env, new_owner);
            }
        }
    }
}
