//! Provider RPC Handler
//!
//! Implements the stdin/stdout JSON RPC loop the host talks to:
//!
//!   terraform-provider-custom serve
//!
//! The handler reads one JSON request per line from stdin, dispatches to the
//! appropriate operation handler, and writes one JSON response per line to
//! stdout until the host closes stdin.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use custom_protocol::{
    ops::names,
    RpcError, RpcRequest, RpcResponse,
    PROTOCOL_VERSION_PROBE,
};

use crate::config::ProviderConfig;
use crate::handlers;

/// Main RPC handler for the provider.
pub struct RpcHandler {
    config: ProviderConfig,
}

impl RpcHandler {
    /// Create a new RPC handler with the given configuration.
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    /// Run the RPC handler, reading from stdin and writing to stdout.
    pub fn run(&self) -> io::Result<()> {
        self.run_with_io(&mut io::stdin().lock(), &mut io::stdout().lock())
    }

    /// Run the RPC handler with custom I/O (for testing).
    ///
    /// Returns once the reader reaches EOF.
    pub fn run_with_io<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line),
                Err(e) => {
                    warn!(error = %e, "rejecting non UTF-8 request");
                    RpcResponse::error(
                        PROTOCOL_VERSION_PROBE,
                        String::new(),
                        RpcError::invalid_request(format!("request is not valid UTF-8: {}", e)),
                    )
                }
            };
            self.write_response(writer, &response)?;
        }
    }

    /// Parse, validate and dispatch one request line.
    pub fn handle_line(&self, line: &str) -> RpcResponse {
        let request: RpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                warn!(error = %e, "rejecting malformed request");
                // On parse error, return an error response with protocol_version: 0
                return RpcResponse::error(
                    PROTOCOL_VERSION_PROBE,
                    String::new(),
                    RpcError::invalid_request(format!("invalid JSON: {}", e)),
                );
            }
        };

        self.handle_request(&request)
    }

    /// Validate the protocol version and dispatch a parsed request.
    pub fn handle_request(&self, request: &RpcRequest) -> RpcResponse {
        if let Err(e) = self.validate_protocol_version(request) {
            warn!(op = %request.op, version = request.protocol_version, "unsupported protocol version");
            return RpcResponse::error(request.protocol_version, request.request_id.clone(), e);
        }

        self.dispatch(request)
    }

    /// Validate the protocol version in the request.
    fn validate_protocol_version(&self, request: &RpcRequest) -> Result<(), RpcError> {
        // probe requests MUST use protocol_version: 0
        if request.op == names::PROBE {
            if request.protocol_version != PROTOCOL_VERSION_PROBE {
                return Err(RpcError::unsupported_protocol(
                    request.protocol_version,
                    PROTOCOL_VERSION_PROBE,
                    PROTOCOL_VERSION_PROBE,
                ));
            }
            return Ok(());
        }

        // All other operations MUST NOT use protocol_version: 0
        if request.protocol_version == PROTOCOL_VERSION_PROBE
            || request.protocol_version < self.config.protocol_min
            || request.protocol_version > self.config.protocol_max
        {
            return Err(RpcError::unsupported_protocol(
                request.protocol_version,
                self.config.protocol_min,
                self.config.protocol_max,
            ));
        }

        Ok(())
    }

    /// Dispatch the request to the appropriate operation handler.
    fn dispatch(&self, request: &RpcRequest) -> RpcResponse {
        let protocol_version = if request.op == names::PROBE {
            PROTOCOL_VERSION_PROBE // probe responses must use protocol_version: 0
        } else {
            request.protocol_version
        };

        debug!(
            op = %request.op,
            request_id = %request.request_id,
            type_name = request.type_name().unwrap_or("-"),
            "dispatching request"
        );

        let result = match request.op.as_str() {
            names::PROBE => handlers::probe::handle(&self.config),
            names::GET_SCHEMA => handlers::schema::handle(&self.config),
            names::PLAN => handlers::plan::handle(request, &self.config),
            names::CREATE => handlers::create::handle(request, &self.config),
            names::READ => handlers::read::handle(request, &self.config),
            names::UPDATE => handlers::update::handle(request, &self.config),
            names::DELETE => handlers::delete::handle(request, &self.config),
            names::IMPORT => handlers::import::handle(request, &self.config),
            _ => Err(RpcError::unknown_operation(&request.op)),
        };

        match result {
            Ok(payload) => RpcResponse::success(
                protocol_version,
                request.request_id.clone(),
                payload,
            ),
            Err(e) => {
                warn!(
                    op = %request.op,
                    request_id = %request.request_id,
                    code = %e.code,
                    "{}",
                    e.message
                );
                RpcResponse::error(protocol_version, request.request_id.clone(), e)
            }
        }
    }

    /// Write the response to the writer.
    fn write_response<W: Write>(&self, writer: &mut W, response: &RpcResponse) -> io::Result<()> {
        let json = serde_json::to_string(response)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(writer, "{}", json)?;
        writer.flush()
    }
}
