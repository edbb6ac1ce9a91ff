//! Built-in documentation sections

use std::fmt;

/// A documentation page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocSection {
    Overview,
    ApiReference,
    Authentication,
    Examples,
    Deployment,
    Troubleshooting,
}

impl DocSection {
    pub const ALL: [DocSection; 6] = [
        DocSection::Overview,
        DocSection::ApiReference,
        DocSection::Authentication,
        DocSection::Examples,
        DocSection::Deployment,
        DocSection::Troubleshooting,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::ApiReference => "api-reference",
            Self::Authentication => "authentication",
            Self::Examples => "examples",
            Self::Deployment => "deployment",
            Self::Troubleshooting => "troubleshooting",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::ApiReference => "API Reference",
            Self::Authentication => "Authentication",
            Self::Examples => "Usage Examples",
            Self::Deployment => "Deployment Guide",
            Self::Troubleshooting => "Troubleshooting",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|d| d.slug() == s)
    }

    /// Section for a slug; unknown slugs show the overview
    pub fn resolve(s: Option<&str>) -> Self {
        s.and_then(Self::from_slug).unwrap_or(Self::Overview)
    }

    pub fn content(self) -> &'static str {
        match self {
            Self::Overview => OVERVIEW,
            Self::ApiReference => API_REFERENCE,
            Self::Authentication => AUTHENTICATION,
            Self::Examples => EXAMPLES,
            Self::Deployment => DEPLOYMENT,
            Self::Troubleshooting => TROUBLESHOOTING,
        }
    }
}

impl fmt::Display for DocSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Getting-started text shown when no subcommand is given
pub const ONBOARDING: &str = "\
Getting started
  1. Log in to GoHighLevel and open Settings > Integrations > Private Integrations.
  2. Create a private integration with the scopes listed under `docs authentication`.
  3. Copy the Private API Key and your Location ID.
  4. Export them as GHL_API_KEY and GHL_LOCATION_ID, or put them in ghl-console.yml.
  5. Run `ghl-console test-connection` to verify them.

Claude Desktop configuration
  {
    \"mcpServers\": {
      \"ghl-mcp-server\": {
        \"command\": \"npx\",
        \"args\": [\"-y\", \"@yourusername/ghl-mcp-server\"],
        \"env\": {
          \"GHL_API_KEY\": \"your_private_integrations_api_key\",
          \"GHL_BASE_URL\": \"https://services.leadconnectorhq.com\",
          \"GHL_LOCATION_ID\": \"your_location_id\"
        }
      }
    }
  }
";

const OVERVIEW: &str = "\
The GoHighLevel MCP server connects Claude Desktop to a GoHighLevel CRM
through a large set of tools grouped into categories.

Key features
  - Multi-user support with per-request credentials
  - Tools covering contacts, messaging, blogs, opportunities, calendars and more
  - Real-time API integration with error handling
  - Claude Desktop MCP protocol compliance

Browse the live catalog with `ghl-console tools`.
";

const API_REFERENCE: &str = "\
Base URL
  http://localhost:8000

Authentication
  Headers (recommended):
    x-ghl-api-key: your_private_integrations_api_key
    x-ghl-location-id: your_location_id
  Query parameters:
    ?apiKey=your_api_key&locationId=your_location_id

GET /health
  Check server health and status.
  { \"status\": \"healthy\", \"server\": \"ghl-mcp-server\", \"version\": \"1.0.0\",
    \"tools\": { \"total\": 269 }, \"multiUser\": true }

GET /tools
  List all available tools.
  { \"tools\": [...], \"count\": 269, \"userSpecific\": true }

POST /execute-tool
  Execute a tool with user credentials.
  Request:  { \"toolName\": \"search_contacts\", \"args\": { \"query\": \"John Doe\", \"limit\": 10 } }
  Response: { \"success\": true, \"result\": {...}, \"toolName\": \"search_contacts\",
              \"executedAt\": \"2024-01-01T00:00:00.000Z\" }
";

const AUTHENTICATION: &str = "\
Use a Private Integrations API key, not a regular API key.

Getting your credentials
  1. Log in to GoHighLevel
  2. Go to Settings > Integrations > Private Integrations
  3. Create a new integration with the required scopes
  4. Save the Private API Key and Location ID

Required scopes
  Core:       contacts.readonly, contacts.write, conversations.readonly,
              conversations.write, opportunities.readonly, opportunities.write
  Additional: calendars.readonly, calendars.write, locations.readonly,
              workflows.readonly, blogs.readonly, blogs.write

Using credentials
  Headers:
    curl -X POST http://localhost:8000/execute-tool \\
      -H \"x-ghl-api-key: your_private_api_key\" \\
      -H \"x-ghl-location-id: your_location_id\" \\
      -H \"Content-Type: application/json\" \\
      -d '{\"toolName\": \"search_contacts\", \"args\": {\"query\": \"John\"}}'
  Query parameters:
    curl -X POST \"http://localhost:8000/execute-tool?apiKey=KEY&locationId=LOC\" ...
";

const EXAMPLES: &str = "\
Search contacts
  ghl-console exec search_contacts --args '{\"query\": \"John Doe\", \"limit\": 10}'

Create contact
  ghl-console exec create_contact --args '{\"firstName\": \"Jane\", \"lastName\": \"Smith\",
    \"email\": \"jane.smith@example.com\", \"tags\": [\"lead\", \"website\"]}'

Send SMS
  ghl-console exec send_sms --args '{\"contactId\": \"contact_123\", \"message\": \"Hi!\"}'

Send email
  ghl-console exec send_email --args '{\"contactId\": \"contact_123\",
    \"subject\": \"Welcome\", \"html\": \"<h1>Welcome!</h1>\"}'

Create blog post
  ghl-console exec create_blog_post --args-file post.json

Create opportunity
  ghl-console exec create_opportunity --args '{\"name\": \"Website Redesign\",
    \"pipelineId\": \"pipeline_123\", \"contactId\": \"contact_123\", \"monetaryValue\": 5000}'
";

const DEPLOYMENT: &str = "\
Local development
  Prerequisites: Node.js 18+, a GoHighLevel account with API access,
  a Private Integrations API key.
    git clone https://github.com/mastanley13/GoHighLevel-MCP.git
    cd GoHighLevel-MCP && npm install
    cp .env.example .env   # add your credentials
    npm run build && npm start

Docker
    docker build -t ghl-mcp-server .
    docker run -p 8000:8000 -e GHL_API_KEY=your_key \\
      -e GHL_LOCATION_ID=your_location_id ghl-mcp-server

Environment variables
  GHL_API_KEY      required  Private Integrations API key
  GHL_LOCATION_ID  required  GoHighLevel Location ID
  GHL_BASE_URL     optional  API base URL (default: services.leadconnectorhq.com)
  NODE_ENV         optional  development or production
";

const TROUBLESHOOTING: &str = "\
Server won't start
  \"GHL_API_KEY environment variable is required\": check the .env file and use a
  Private Integrations key with the correct Location ID.

API authentication fails (401 Unauthorized)
  Verify the key type, the enabled scopes and the Location ID, then run
  `ghl-console test-connection`.

Tool execution timeouts
  Check connectivity to the GoHighLevel API and rate limits, or raise
  server.timeout_ms in ghl-console.yml.

Debugging
  ghl-console status      # same as curl http://localhost:8000/health
  ghl-console tools       # same as curl http://localhost:8000/tools
  RUST_LOG=debug ghl-console ...   # request details in the log file
";
