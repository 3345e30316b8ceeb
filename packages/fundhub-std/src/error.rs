/// Return with an error if a condition is not met.
///
/// Simplifies the pattern of checking for a condition and returning with an error.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $e:expr $(,)?) => {
        if !$cond {
            return Err($e);
        }
    };
}

// The following macros are mostly intended to serve as pseudo-documentation within tests,
// in addition to convenience/clarity

/// Assert that a [`Result`] is [`Ok`]
///
/// If the provided expresion evaulates to [`Ok`], then the
/// macro returns the value contained within the [`Ok`]. If
/// the [`Result`] is an [`Err`] then the macro will [`panic`]
/// with a message that includes the expression and the error.
#[macro_export]
macro_rules! assert_ok {
    ( $x:expr ) => {
        match $x {
            std::result::Result::Ok(v) => v,
            std::result::Result::Err(e) => {
                panic!("Error calling {}: {:?}", stringify!($x), e);
            }
        }
    };
}

/// Assert that an [`Option`] is [`Some`]
///
/// If the provided expresion evaulates to [`Some`], then the
/// macro returns the value contained within the [`Some`]. If
/// the [`Option`] is [`None`] then the macro will [`panic`]
/// with a message that includes the expression
#[macro_export]
macro_rules! assert_some {
    ( $x:expr ) => {
        match $x {
            core::option::Option::Some(s) => s,
            core::option::Option::None => {
                panic!("Expected value when calling {}, got None", stringify!($x));
            }
        }
    };
}

/// Assert that a [`Result`] is [`Err`] and matches a desired error
#[macro_export]
macro_rules! assert_err {
    ( $x:expr, $e:expr ) => {
        match $x {
            std::result::Result::Err(e) => {
                if $e != e {
                    panic!("Expected error {}, got {:?} instead", stringify!($e), e)
                }
            }
            std::result::Result::Ok(v) => {
                panic!(
                    "Expected error when calling {}, got {:?} instead",
                    stringify!($x),
                    v
                );
            }
        }
    };
}

/// Assert that the result of a `try_` client call is the given contract error.
#[macro_export]
macro_rules! assert_contract_err {
    ($given:expr, $expected:expr) => {
        match $given {
            std::result::Result::Ok(v) => panic!(
                "Expected error {:?}, got {:?} instead",
                $expected,
                v
            ),
            std::result::Result::Err(e) => match e {
                std::result::Result::Err(e) => {
                    panic!("Unexpected error {:?}, expected {:?}", e, $expected)
                }
                std::result::Result::Ok(v) if v != $expected => {
                    panic!("Expected error {:?}, got {:?} instead", $expected, v)
                }
                _ => (),
            },
        }
    };
}

/// Call a `try_` client method with only the auth of `$caller` mocked and return the
/// successful value.
#[macro_export]
macro_rules! assert_auth {
    ($caller:expr, $client:ident . $method:ident ( $($arg:expr),* $(,)? )) => {{
        use soroban_sdk::IntoVal;

        let call_result = $client
            .mock_auths(&[soroban_sdk::testutils::MockAuth {
                address: &$caller,
                invoke: &soroban_sdk::testutils::MockAuthInvoke {
                    contract: &$client.address,
                    fn_name: &stringify!($method).replace("try_", ""),
                    args: ($($arg.clone(),)*).into_val(&$client.env),
                    sub_invokes: &[],
                },
            }])
            .$method($($arg),*);

        match call_result {
            Ok(outer) => match outer {
                Ok(inner) => inner,
                Err(err) => panic!("Expected Ok result, but got a conversion error: {:?}", err),
            },
            Err(err) => panic!("Expected Ok result, but got an error {:?}", err),
        }
    }};
}

/// Call a `try_` client method with only the auth of `$caller` mocked and assert that the
/// invocation is rejected.
#[macro_export]
macro_rules! assert_auth_err {
    ($caller:expr, $client:ident . $method:ident ( $($arg:expr),* $(,)? )) => {{
        use soroban_sdk::IntoVal;

        let call_result = $client
            .mock_auths(&[soroban_sdk::testutils::MockAuth {
                address: &$caller,
                invoke: &soroban_sdk::testutils::MockAuthInvoke {
                    contract: &$client.address,
                    fn_name: &stringify!($method).replace("try_", ""),
                    args: ($($arg.clone(),)*).into_val(&$client.env),
                    sub_invokes: &[],
                },
            }])
            .$method($($arg),*);

        if call_result.is_ok() {
            panic!("Expected the call to {} to be rejected", stringify!($method));
        }
    }};
}
